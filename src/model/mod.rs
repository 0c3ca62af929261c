//! Core data structures shared by every stage of the pipeline.
//!
//! - [`types`] – Periodic table elements.
//! - [`registry`] – The ordered element set that fixes composition columns.
//! - [`attribute`] – Per-element physical attributes with undefined cells.
//! - [`dataset`] – Formula-indexed property tables used as input.
//! - [`composition`] – Composition vectors that keep absent and zero apart.
//! - [`feature`] – Formula × feature matrices.
//! - [`distance`] – Pairwise composition-space distances.
//!
//! Every stage consumes these types by reference and produces a new value;
//! nothing is mutated after construction.

pub mod attribute;
pub mod composition;
pub mod dataset;
pub mod distance;
pub mod feature;
pub mod registry;
pub mod types;
