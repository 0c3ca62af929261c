//! Composition vectors and tables.
//!
//! A [`CompositionVector`] holds one cell per registry element. A cell is
//! `None` when the element does not occur in the formula and `Some(q)` when
//! it does, even when `q == 0.0`; aggregations skip absent cells entirely.

use super::registry::ElementRegistry;
use super::types::Element;
use crate::formula::ParseFormulaError;
use std::collections::HashMap;

/// Unit of the quantities in a composition vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Basis {
    /// Raw atomic counts, as written in the formula.
    #[default]
    AtomicCount,
    /// Alloy percentages divided down to fractions.
    Fraction,
}

/// Quantities of one formula over the full registry.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionVector {
    cells: Vec<Option<f64>>,
    basis: Basis,
}

impl CompositionVector {
    pub(crate) fn new(cells: Vec<Option<f64>>, basis: Basis) -> Self {
        Self { cells, basis }
    }

    /// Cells in registry column order.
    #[inline]
    pub fn cells(&self) -> &[Option<f64>] {
        &self.cells
    }

    #[inline]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Column indices and quantities of the elements present in the formula.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|q| (i, q)))
    }

    /// Number of elements present, zero quantities included.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Sum of all present quantities.
    pub fn total(&self) -> f64 {
        self.present().map(|(_, q)| q).sum()
    }

    /// Cells with absent elements filled as `0.0`.
    pub fn dense(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.unwrap_or(0.0)).collect()
    }

    /// L1 distance to `other`, treating absent cells as zero.
    ///
    /// Both vectors must come from the same registry.
    pub fn manhattan(&self, other: &CompositionVector) -> f64 {
        self.cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| (a.unwrap_or(0.0) - b.unwrap_or(0.0)).abs())
            .sum()
    }
}

/// A formula that failed to parse while building a table.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaFailure {
    /// Position of the entry in the input sequence.
    pub index: usize,
    pub formula: String,
    pub error: ParseFormulaError,
}

/// Formula id → composition vector, in input order.
#[derive(Debug, Clone)]
pub struct CompositionTable {
    registry: ElementRegistry,
    formulas: Vec<String>,
    vectors: Vec<CompositionVector>,
    lookup: HashMap<String, usize>,
    failures: Vec<FormulaFailure>,
    skipped: Vec<usize>,
}

impl CompositionTable {
    pub(crate) fn new(registry: &ElementRegistry) -> Self {
        Self {
            registry: registry.clone(),
            formulas: Vec::new(),
            vectors: Vec::new(),
            lookup: HashMap::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Adds a row unless the formula id is already present.
    ///
    /// Returns `false` for a repeated id; the same string always parses to the
    /// same vector, so the first row is kept.
    pub(crate) fn insert(&mut self, formula: &str, vector: CompositionVector) -> bool {
        if self.lookup.contains_key(formula) {
            return false;
        }
        self.lookup.insert(formula.to_string(), self.formulas.len());
        self.formulas.push(formula.to_string());
        self.vectors.push(vector);
        true
    }

    pub(crate) fn record_failure(&mut self, failure: FormulaFailure) {
        self.failures.push(failure);
    }

    pub(crate) fn record_skipped(&mut self, index: usize) {
        self.skipped.push(index);
    }

    #[inline]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Registry elements, i.e. the column labels.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        self.registry.symbols()
    }

    /// Formula ids in row order.
    #[inline]
    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }

    pub fn get(&self, formula: &str) -> Option<&CompositionVector> {
        self.lookup.get(formula).map(|&i| &self.vectors[i])
    }

    /// Quantity of `element` in `formula`; `None` if either is absent.
    pub fn quantity(&self, formula: &str, element: Element) -> Option<f64> {
        let col = self.registry.index_of(element)?;
        self.get(formula)?.cells[col]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompositionVector)> + '_ {
        self.formulas
            .iter()
            .map(String::as_str)
            .zip(self.vectors.iter())
    }

    /// Formulas rejected by the parser, in input order.
    #[inline]
    pub fn failures(&self) -> &[FormulaFailure] {
        &self.failures
    }

    /// Input positions of blank entries that were skipped.
    #[inline]
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
