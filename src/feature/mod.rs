//! Feature generation from per-element attributes.
//!
//! This module combines a [`CompositionTable`](crate::CompositionTable)
//! with an [`AttributeTable`](crate::AttributeTable) into a formula ×
//! feature matrix:
//!
//! - [`FeatureEngine`] — One column per (attribute, [`Operator`]) pair,
//!   staged attribute by attribute through a bounded scratch store
//! - [`delete_unusable`] — Drops zero-variance and all-undefined columns
//! - [`correlation_matrix`] — Pairwise Pearson correlation of the columns

mod correlation;
mod engine;
mod filter;
mod operator;
mod scratch;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use engine::FeatureEngine;
pub use filter::delete_unusable;
pub use operator::{Aggregate, Operator, ParseOperatorError};
