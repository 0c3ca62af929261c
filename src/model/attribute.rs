//! Per-element physical attributes.
//!
//! An [`AttributeTable`] is a dense attribute × element table whose cells may
//! be undefined, aligned to one [`ElementRegistry`]. Tables are built once
//! at start-up (programmatically, from TOML text, or from the built-in
//! elemental data) and only read afterwards.

use super::registry::ElementRegistry;
use super::types::Element;
use crate::error::Error;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;
use tracing::debug;

/// One named attribute with a value per registry element.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRow {
    name: String,
    values: Vec<Option<f64>>,
}

impl AttributeRow {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in registry column order; `None` marks an unknown property.
    #[inline]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Returns `true` when the attribute is undefined for every element.
    pub fn is_undefined(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Read-only attribute × element table.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    registry: ElementRegistry,
    rows: Vec<AttributeRow>,
}

#[derive(Debug, Deserialize)]
struct AttributeFile {
    #[serde(default, rename = "attribute")]
    attributes: Vec<AttributeSpec>,
}

#[derive(Debug, Deserialize)]
struct AttributeSpec {
    name: String,
    #[serde(default)]
    values: BTreeMap<String, f64>,
}

impl AttributeTable {
    /// Builds a table from `(name, values)` rows in registry column order.
    ///
    /// Non-finite values are stored as undefined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeShape`] if a row length differs from the
    /// registry length and [`Error::DuplicateAttribute`] if a name repeats.
    pub fn new(
        registry: &ElementRegistry,
        rows: impl IntoIterator<Item = (String, Vec<Option<f64>>)>,
    ) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        let mut table_rows = Vec::new();

        for (name, values) in rows {
            if values.len() != registry.len() {
                return Err(Error::attribute_shape(name, registry.len(), values.len()));
            }
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateAttribute(name));
            }
            let values = values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect();
            table_rows.push(AttributeRow { name, values });
        }

        Ok(Self {
            registry: registry.clone(),
            rows: table_rows,
        })
    }

    /// Parses a table from TOML text.
    ///
    /// The expected layout is one `[[attribute]]` table per attribute:
    ///
    /// ```toml
    /// [[attribute]]
    /// name = "pauling_electronegativity"
    /// values = { H = 2.20, O = 3.44, Fe = 1.83 }
    /// ```
    ///
    /// Elements not listed are undefined. Elements outside `registry` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeParse`] for malformed TOML,
    /// [`Error::UnknownElement`] for an unrecognised symbol and
    /// [`Error::DuplicateAttribute`] for a repeated name.
    pub fn from_toml(registry: &ElementRegistry, text: &str) -> Result<Self, Error> {
        let file: AttributeFile = toml::from_str(text)?;

        let mut rows = Vec::with_capacity(file.attributes.len());
        for spec in file.attributes {
            let mut values = vec![None; registry.len()];
            for (symbol, value) in &spec.values {
                let element = Element::from_str(symbol)?;
                match registry.index_of(element) {
                    Some(idx) => values[idx] = Some(*value),
                    None => debug!(
                        attribute = %spec.name,
                        element = %element,
                        "ignoring attribute value for element outside the registry"
                    ),
                }
            }
            rows.push((spec.name, values));
        }

        Self::new(registry, rows)
    }

    /// Built-in table with the `atomic_number` and `atomic_mass` attributes.
    pub fn elemental(registry: &ElementRegistry) -> Self {
        let atomic_number = registry
            .symbols()
            .iter()
            .map(|el| Some(f64::from(el.atomic_number())))
            .collect();
        let atomic_mass = registry
            .symbols()
            .iter()
            .map(|el| Some(el.atomic_mass()))
            .collect();

        Self {
            registry: registry.clone(),
            rows: vec![
                AttributeRow {
                    name: "atomic_number".to_string(),
                    values: atomic_number,
                },
                AttributeRow {
                    name: "atomic_mass".to_string(),
                    values: atomic_mass,
                },
            ],
        }
    }

    #[inline]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    #[inline]
    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    pub fn get(&self, name: &str) -> Option<&AttributeRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// All attribute values of one element, in table order.
    ///
    /// Elements outside the registry get an undefined value for every
    /// attribute.
    pub fn attributes_for(&self, element: Element) -> Vec<(&str, Option<f64>)> {
        let idx = self.registry.index_of(element);
        self.rows
            .iter()
            .map(|row| (row.name.as_str(), idx.and_then(|i| row.values[i])))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> ElementRegistry {
        ElementRegistry::from_symbols(["H", "O", "Fe", "Ni"]).unwrap()
    }

    #[test]
    fn from_toml_fills_listed_elements_only() {
        let reg = small_registry();
        let table = AttributeTable::from_toml(
            &reg,
            r#"
            [[attribute]]
            name = "en"
            values = { H = 2.2, O = 3.44 }

            [[attribute]]
            name = "blank"
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let en = table.get("en").unwrap();
        assert_eq!(en.values(), &[Some(2.2), Some(3.44), None, None]);
        assert!(!en.is_undefined());
        assert!(table.get("blank").unwrap().is_undefined());
    }

    #[test]
    fn from_toml_ignores_elements_outside_registry() {
        let reg = small_registry();
        let table = AttributeTable::from_toml(
            &reg,
            r#"
            [[attribute]]
            name = "en"
            values = { Cu = 1.9, Fe = 1.83 }
            "#,
        )
        .unwrap();
        assert_eq!(table.rows()[0].values(), &[None, None, Some(1.83), None]);
    }

    #[test]
    fn from_toml_rejects_unknown_symbols() {
        let reg = small_registry();
        let err = AttributeTable::from_toml(
            &reg,
            r#"
            [[attribute]]
            name = "en"
            values = { Zz = 1.0 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownElement(_)));
    }

    #[test]
    fn from_toml_rejects_malformed_text() {
        let reg = small_registry();
        let err = AttributeTable::from_toml(&reg, "[[attribute]\nname = ").unwrap_err();
        assert!(matches!(err, Error::AttributeParse(_)));
    }

    #[test]
    fn new_checks_row_shape_and_names() {
        let reg = small_registry();
        let err = AttributeTable::new(&reg, [("a".to_string(), vec![Some(1.0)])]).unwrap_err();
        assert!(matches!(
            err,
            Error::AttributeShape {
                expected: 4,
                found: 1,
                ..
            }
        ));

        let err = AttributeTable::new(
            &reg,
            [
                ("a".to_string(), vec![None; 4]),
                ("a".to_string(), vec![None; 4]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateAttribute(name) if name == "a"));
    }

    #[test]
    fn new_stores_non_finite_values_as_undefined() {
        let reg = small_registry();
        let table = AttributeTable::new(
            &reg,
            [(
                "x".to_string(),
                vec![Some(f64::NAN), Some(1.0), Some(f64::INFINITY), None],
            )],
        )
        .unwrap();
        assert_eq!(table.rows()[0].values(), &[None, Some(1.0), None, None]);
    }

    #[test]
    fn elemental_table_matches_element_data() {
        let reg = small_registry();
        let table = AttributeTable::elemental(&reg);
        let attrs = table.attributes_for(Element::Fe);
        assert_eq!(attrs[0], ("atomic_number", Some(26.0)));
        assert_eq!(attrs[1], ("atomic_mass", Some(55.845)));

        let outside = table.attributes_for(Element::Cu);
        assert!(outside.iter().all(|(_, v)| v.is_none()));
    }
}
