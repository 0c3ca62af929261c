//! Configuration for composition building and featurization.
//!
//! - [`CompositionConfig`] — Alloy-percentage detection and normalization
//! - [`FeatureConfig`] — Aggregation operators and scratch storage location

use crate::feature::Operator;
use std::path::PathBuf;

/// Controls how parsed quantities become composition vectors.
///
/// A formula whose raw quantities sum to a value inside
/// `[percent_lower, percent_upper]` is read as an alloy written in
/// percentages, and each quantity is divided by `percent_scale`.
///
/// # Examples
///
/// ```
/// use formula_forge::CompositionConfig;
///
/// let strict = CompositionConfig {
///     percent_lower: 99.9,
///     percent_upper: 100.1,
///     ..Default::default()
/// };
/// assert!(strict.is_percentage(100.0));
/// assert!(!strict.is_percentage(99.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionConfig {
    /// Inclusive lower bound of the alloy window.
    pub percent_lower: f64,

    /// Inclusive upper bound of the alloy window.
    pub percent_upper: f64,

    /// Divisor applied to every quantity of an alloy formula.
    pub percent_scale: f64,
}

impl CompositionConfig {
    /// Returns `true` when a raw quantity sum falls in the alloy window.
    #[inline]
    pub fn is_percentage(&self, total: f64) -> bool {
        (self.percent_lower..=self.percent_upper).contains(&total)
    }
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            percent_lower: 99.5,
            percent_upper: 100.5,
            percent_scale: 100.0,
        }
    }
}

/// Controls which features the engine produces and where it stages them.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    /// Operators applied to every attribute, in output column order.
    ///
    /// Repeats are ignored by the engine; only the first occurrence counts.
    pub operators: Vec<Operator>,

    /// Parent directory for the per-attribute scratch store.
    ///
    /// If `None`, the system temporary directory is used.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            operators: Operator::ALL.to_vec(),
            scratch_dir: None,
        }
    }
}
