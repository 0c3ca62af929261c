//! Composition-based categories.
//!
//! Each formula receives one label `n-E-c` per constituent element `E` whose
//! rounded content `c` is at least one, where `n` counts such elements.
//! Alloy compositions are labelled in percent, atomic compositions in
//! atom counts, so `Fe60Ni40` gives `2-Fe-60` and `2-Ni-40` while `Fe2O3`
//! gives `2-Fe-2` and `2-O-3`.

use crate::model::composition::{Basis, CompositionTable};
use crate::model::dataset::{Dataset, Entry};
use crate::model::types::{Element, ParseElementError};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum content for an element to count as present.
const PRESENCE_THRESHOLD: f64 = 0.5;

/// Members of one category: formula id → property values.
pub type Category = BTreeMap<String, Vec<f64>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCategoryError {
    #[error("category label '{0}' is not of the form <count>-<element>-<content>")]
    Malformed(String),
    #[error(transparent)]
    Element(#[from] ParseElementError),
}

/// Category key: element count, constituent element and its rounded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryLabel {
    pub element_count: usize,
    pub element: Element,
    pub content: u64,
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.element_count, self.element, self.content)
    }
}

impl FromStr for CategoryLabel {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCategoryError::Malformed(s.to_string());
        let mut parts = s.splitn(3, '-');
        let (Some(n), Some(el), Some(c)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        Ok(Self {
            element_count: n.parse().map_err(|_| malformed())?,
            element: Element::from_str(el)?,
            content: c.parse().map_err(|_| malformed())?,
        })
    }
}

/// Rounds half up, as used for category contents.
#[inline]
fn round_content(x: f64) -> u64 {
    (x + 0.5).floor() as u64
}

/// Groups dataset rows by composition label.
///
/// A formula with `k` qualifying elements appears in exactly `k`
/// categories. Rows are looked up by formula id; with repeated ids the last
/// row is used.
pub(super) fn categorize(
    dataset: &Dataset,
    composition: &CompositionTable,
    percent_scale: f64,
) -> BTreeMap<CategoryLabel, Category> {
    let rows: HashMap<&str, &Entry> = dataset
        .entries()
        .iter()
        .map(|e| (e.formula.as_str(), e))
        .collect();
    let elements = composition.elements();

    let mut categories: BTreeMap<CategoryLabel, Category> = BTreeMap::new();

    for (formula, vector) in composition.iter() {
        let Some(row) = rows.get(formula) else {
            continue;
        };

        let scale = match vector.basis() {
            Basis::Fraction => percent_scale,
            Basis::AtomicCount => 1.0,
        };
        let constituents: Vec<(Element, f64)> = vector
            .present()
            .map(|(col, q)| (elements[col], q * scale))
            .filter(|&(_, c)| c >= PRESENCE_THRESHOLD)
            .collect();
        let element_count = constituents.len();

        for (element, content) in constituents {
            let label = CategoryLabel {
                element_count,
                element,
                content: round_content(content),
            };
            categories
                .entry(label)
                .or_default()
                .insert(formula.to_string(), row.values.clone());
        }
    }

    categories
}
