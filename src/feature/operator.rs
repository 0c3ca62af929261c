//! Aggregation operators over a formula's element attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid aggregation operator: '{0}'")]
pub struct ParseOperatorError(String);

/// Statistic applied to the attribute values of the elements in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Σv
    Sum,
    /// Mean of v.
    Avg,
    /// Σ(w·v) / Σw, weighted by composition.
    Wavg,
    Max,
    Min,
    /// max(v) − min(v)
    Range,
    /// Population standard deviation of v.
    Std,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Sum,
        Operator::Avg,
        Operator::Wavg,
        Operator::Max,
        Operator::Min,
        Operator::Range,
        Operator::Std,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Avg => "avg",
            Operator::Wavg => "wavg",
            Operator::Max => "max",
            Operator::Min => "min",
            Operator::Range => "range",
            Operator::Std => "std",
        }
    }

    /// Reads this operator's value from a precomputed aggregate.
    pub fn apply(&self, aggregate: &Aggregate) -> Option<f64> {
        match self {
            Operator::Sum => Some(aggregate.sum),
            Operator::Avg => Some(aggregate.mean()),
            Operator::Wavg => aggregate.weighted_mean(),
            Operator::Max => Some(aggregate.max),
            Operator::Min => Some(aggregate.min),
            Operator::Range => Some(aggregate.max - aggregate.min),
            Operator::Std => Some(aggregate.std),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}

/// Running statistics over the (weight, value) pairs of one formula.
///
/// Only elements that are present in the formula and have a defined
/// attribute value contribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    count: usize,
    sum: f64,
    weight_sum: f64,
    weighted_sum: f64,
    max: f64,
    min: f64,
    std: f64,
}

impl Aggregate {
    /// Builds the aggregate, or `None` when there is no pair at all.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let pairs: Vec<(f64, f64)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return None;
        }

        let count = pairs.len();
        let mut sum = 0.0;
        let mut weight_sum = 0.0;
        let mut weighted_sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for &(w, v) in &pairs {
            sum += v;
            weight_sum += w;
            weighted_sum += w * v;
            max = max.max(v);
            min = min.min(v);
        }

        let mean = sum / count as f64;
        let std = if max == min {
            0.0
        } else {
            let ss: f64 = pairs.iter().map(|&(_, v)| (v - mean).powi(2)).sum();
            (ss / count as f64).sqrt()
        };

        Some(Self {
            count,
            sum,
            weight_sum,
            weighted_sum,
            max,
            min,
            std,
        })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// `None` when the weights sum to zero.
    pub fn weighted_mean(&self) -> Option<f64> {
        (self.weight_sum != 0.0).then(|| self.weighted_sum / self.weight_sum)
    }
}
