use crate::model::registry::ElementRegistry;
use crate::model::types::Element;
use regex::Regex;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

static QUANTITY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn quantity_pattern() -> &'static Regex {
    QUANTITY_PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]*\.?[0-9]+")
            .expect("quantity pattern is a valid regex. This is a library bug.")
    })
}

/// Element → quantity mapping parsed from one formula.
pub type Composition = BTreeMap<Element, f64>;

/// A formula string that does not follow the `Symbol Quantity ...` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFormulaError {
    /// The formula is blank.
    #[error("formula is empty")]
    Empty,

    /// A symbol is not an element of the registry.
    #[error("formula '{formula}' contains '{symbol}', which is not a registered element symbol")]
    UnknownSymbol { formula: String, symbol: String },

    /// A quantity appears with no element symbol before it.
    #[error("formula '{formula}' has quantity '{quantity}' with no element symbol before it")]
    MissingSymbol { formula: String, quantity: String },

    /// The formula does not end with a quantity.
    #[error("formula '{formula}' must end with a quantity, found trailing '{trailing}'")]
    MissingQuantity { formula: String, trailing: String },

    /// A quantity is not a finite number.
    #[error("formula '{formula}' has an unreadable quantity '{quantity}'")]
    InvalidQuantity { formula: String, quantity: String },
}

/// Parses a bracket-free formula such as `"H2O1"` or `"Fe50Ni50"`.
///
/// Every element symbol must be followed by a numeric quantity (integer or
/// decimal), so `"H2O"` is rejected while `"H2O1"` is accepted. Quantities
/// of a repeated element are summed.
///
/// # Arguments
///
/// * `formula` — Formula string without separators or brackets
/// * `registry` — Elements that are accepted as symbols
///
/// # Errors
///
/// Returns [`ParseFormulaError`] for blank input, symbols outside the
/// registry, quantities without a symbol, quantities too large to represent,
/// or a missing trailing quantity.
///
/// # Examples
///
/// ```
/// use formula_forge::{Element, ElementRegistry, parse_formula};
///
/// let registry = ElementRegistry::periodic();
/// let water = parse_formula("H2O1", &registry)?;
/// assert_eq!(water[&Element::H], 2.0);
/// assert_eq!(water[&Element::O], 1.0);
///
/// assert!(parse_formula("H2O", &registry).is_err());
/// # Ok::<(), formula_forge::ParseFormulaError>(())
/// ```
pub fn parse_formula(
    formula: &str,
    registry: &ElementRegistry,
) -> Result<Composition, ParseFormulaError> {
    if formula.trim().is_empty() {
        return Err(ParseFormulaError::Empty);
    }

    let mut composition = Composition::new();
    let mut cursor = 0;

    for m in quantity_pattern().find_iter(formula) {
        let symbol = &formula[cursor..m.start()];
        if symbol.is_empty() {
            return Err(ParseFormulaError::MissingSymbol {
                formula: formula.to_string(),
                quantity: m.as_str().to_string(),
            });
        }

        let element = Element::from_str(symbol)
            .ok()
            .filter(|el| registry.contains(*el))
            .ok_or_else(|| ParseFormulaError::UnknownSymbol {
                formula: formula.to_string(),
                symbol: symbol.to_string(),
            })?;

        let quantity = m
            .as_str()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| ParseFormulaError::InvalidQuantity {
                formula: formula.to_string(),
                quantity: m.as_str().to_string(),
            })?;

        *composition.entry(element).or_insert(0.0) += quantity;
        cursor = m.end();
    }

    if cursor < formula.len() {
        return Err(ParseFormulaError::MissingQuantity {
            formula: formula.to_string(),
            trailing: formula[cursor..].to_string(),
        });
    }

    Ok(composition)
}

/// Returns `true` if `formula` parses against `registry`.
pub fn is_valid_formula(formula: &str, registry: &ElementRegistry) -> bool {
    parse_formula(formula, registry).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(formula: &str) -> Result<Composition, ParseFormulaError> {
        parse_formula(formula, &ElementRegistry::periodic())
    }

    #[test]
    fn parses_explicit_quantities() {
        let c = parse("H2O1").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[&Element::H], 2.0);
        assert_eq!(c[&Element::O], 1.0);

        let c = parse("C60").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[&Element::C], 60.0);
    }

    #[test]
    fn parses_decimal_quantities() {
        let c = parse("Fe0.5Ni.25Co1.").unwrap_err();
        assert!(matches!(c, ParseFormulaError::MissingQuantity { trailing, .. } if trailing == "."));

        let c = parse("Fe0.5Ni.25").unwrap();
        assert_eq!(c[&Element::Fe], 0.5);
        assert_eq!(c[&Element::Ni], 0.25);
    }

    #[test]
    fn repeated_elements_are_summed() {
        let c = parse("O1O1").unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[&Element::O], 2.0);

        let c = parse("Cu1Zn2Cu0.5").unwrap();
        assert_eq!(c[&Element::Cu], 1.5);
        assert_eq!(c[&Element::Zn], 2.0);
    }

    #[test]
    fn overflowing_quantities_are_rejected() {
        let formula = format!("Fe{}O1", "9".repeat(400));
        let err = parse(&formula).unwrap_err();
        assert!(matches!(
            err,
            ParseFormulaError::InvalidQuantity { quantity, .. } if quantity.len() == 400
        ));
        assert!(!is_valid_formula(&formula, &ElementRegistry::periodic()));
    }

    #[test]
    fn zero_quantities_are_kept() {
        let c = parse("Fe0Ni1").unwrap();
        assert_eq!(c.get(&Element::Fe), Some(&0.0));
    }

    #[test]
    fn missing_trailing_quantity_fails() {
        let err = parse("H2O").unwrap_err();
        assert_eq!(
            err,
            ParseFormulaError::MissingQuantity {
                formula: "H2O".to_string(),
                trailing: "O".to_string(),
            }
        );
        assert!(matches!(parse("C"), Err(ParseFormulaError::MissingQuantity { .. })));
    }

    #[test]
    fn unknown_symbols_fail() {
        let err = parse("Xx2O1").unwrap_err();
        assert!(matches!(err, ParseFormulaError::UnknownSymbol { symbol, .. } if symbol == "Xx"));

        // lower-case and bracketed fragments are not symbols
        assert!(matches!(parse("h2o1"), Err(ParseFormulaError::UnknownSymbol { .. })));
        assert!(matches!(
            parse("Ca1(OH)2"),
            Err(ParseFormulaError::UnknownSymbol { .. })
        ));
        assert!(matches!(
            parse("H2 O1"),
            Err(ParseFormulaError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn symbols_outside_registry_fail() {
        let registry = ElementRegistry::from_symbols(["H", "O"]).unwrap();
        assert!(parse_formula("H2O1", &registry).is_ok());
        let err = parse_formula("Fe2O3", &registry).unwrap_err();
        assert!(matches!(err, ParseFormulaError::UnknownSymbol { symbol, .. } if symbol == "Fe"));
    }

    #[test]
    fn leading_quantity_fails() {
        let err = parse("2H1").unwrap_err();
        assert!(matches!(err, ParseFormulaError::MissingSymbol { quantity, .. } if quantity == "2"));
    }

    #[test]
    fn blank_input_fails() {
        assert_eq!(parse(""), Err(ParseFormulaError::Empty));
        assert_eq!(parse("   "), Err(ParseFormulaError::Empty));
    }

    #[test]
    fn is_valid_formula_matches_parse() {
        let registry = ElementRegistry::periodic();
        assert!(is_valid_formula("Fe50Ni50", &registry));
        assert!(!is_valid_formula("Fe50Ni", &registry));
        assert!(!is_valid_formula("", &registry));
    }
}
