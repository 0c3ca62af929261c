use super::types::Element;
use crate::error::Error;
use std::collections::HashMap;
use std::str::FromStr;

/// Ordered, immutable set of the elements a run accepts.
///
/// The registry is the canonical column order of every composition vector
/// and the value order of every attribute row, so two vectors built against
/// the same registry are directly comparable cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRegistry {
    symbols: Vec<Element>,
    index: HashMap<Element, usize>,
}

impl ElementRegistry {
    /// All 118 elements in atomic-number order.
    pub fn periodic() -> Self {
        Self::from_ordered(Element::ALL.to_vec())
    }

    /// Builds a registry from an explicit element order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an element is listed twice.
    pub fn new(symbols: impl IntoIterator<Item = Element>) -> Result<Self, Error> {
        let symbols: Vec<Element> = symbols.into_iter().collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &el) in symbols.iter().enumerate() {
            if index.insert(el, i).is_some() {
                return Err(Error::DuplicateElement(el));
            }
        }
        Ok(Self { symbols, index })
    }

    /// Builds a registry from element symbols such as `["Fe", "Ni", "O"]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] for an unrecognised symbol and
    /// [`Error::DuplicateElement`] for a repeated one.
    pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let elements = symbols
            .into_iter()
            .map(Element::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(elements)
    }

    fn from_ordered(symbols: Vec<Element>) -> Self {
        let index = symbols.iter().enumerate().map(|(i, &el)| (el, i)).collect();
        Self { symbols, index }
    }

    #[inline]
    pub fn symbols(&self) -> &[Element] {
        &self.symbols
    }

    /// Column position of `element`, or `None` if it is not registered.
    #[inline]
    pub fn index_of(&self, element: Element) -> Option<usize> {
        self.index.get(&element).copied()
    }

    #[inline]
    pub fn contains(&self, element: Element) -> bool {
        self.index.contains_key(&element)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::periodic()
    }
}
