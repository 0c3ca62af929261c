//! A pure Rust library for turning chemical formulas into machine-learning
//! features and curating formula-indexed property datasets.
//!
//! Formulas are written as alternating element symbols and quantities
//! (`"Fe2O3"`, `"Fe60Ni40"`). They are parsed into composition vectors over
//! a fixed element registry, combined with per-element attributes into
//! aggregate features, and used to deduplicate, categorize and compare
//! datasets.
//!
//! # Features
//!
//! - **Formula parsing** — Strict `Symbol Quantity ...` grammar with
//!   decimal quantities and automatic detection of percentage alloys
//! - **Compositions** — Dense vectors that keep "element absent" apart from
//!   "element present with quantity zero"
//! - **Featurization** — Sum, average, weighted average, maximum, minimum,
//!   range and standard deviation of every attribute, skipping undefined
//!   attribute values
//! - **Curation** — Deduplication, composition categories, representative
//!   subsets and composition-space distances
//!
//! # Quick Start
//!
//! ```
//! use formula_forge::{AttributeTable, CompositionBuilder, ElementRegistry};
//! use formula_forge::{Error, FeatureEngine, delete_unusable};
//!
//! let registry = ElementRegistry::from_symbols(["H", "C", "O"])?;
//! let attributes = AttributeTable::from_toml(
//!     &registry,
//!     r#"
//!     [[attribute]]
//!     name = "valence"
//!     values = { H = 1.0, C = 4.0, O = 4.0 }
//!
//!     [[attribute]]
//!     name = "radius"
//!     values = { C = 0.7 }
//!     "#,
//! )?;
//!
//! let compositions = CompositionBuilder::new(&registry).build(["H2O1", "C1O2", "H2O"])?;
//! assert_eq!(compositions.len(), 2);
//! assert_eq!(compositions.failures()[0].formula, "H2O");
//!
//! let features = FeatureEngine::new(&attributes).compute(&compositions)?;
//! assert_eq!(features.column_count(), 14);
//! assert_eq!(features.value("H2O1", "valence.sum"), Some(5.0));
//! assert_eq!(features.value("H2O1", "valence.avg"), Some(2.5));
//! assert_eq!(features.value("H2O1", "valence.wavg"), Some(2.0));
//! assert_eq!(features.value("H2O1", "radius.max"), None);
//!
//! // radius is defined for a single formula, so its columns carry no variance
//! let usable = delete_unusable(&features);
//! assert!(usable.column_names().iter().all(|n| n.starts_with("valence.")));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] — Progress observers for long-running stages
//! - [`CompositionBuilder`] — Formula strings to a [`CompositionTable`]
//! - [`FeatureEngine`] — Compositions and attributes to a [`FeatureTable`]
//! - [`DatasetCurator`] — Deduplication, categories, subsets and distances
//!
//! # Data Types
//!
//! ## Inputs
//!
//! - [`Element`] — Chemical element (H through Og)
//! - [`ElementRegistry`] — Ordered element set fixing the composition columns
//! - [`AttributeTable`] — Per-element attributes with undefined cells
//! - [`Dataset`] — Formula ids with one or more property columns
//!
//! ## Outputs
//!
//! - [`CompositionVector`] — One formula over the registry
//! - [`FeatureTable`] — Formula × `<attribute>.<operator>` matrix
//! - [`CorrelationMatrix`] — Pairwise correlation of feature columns
//! - [`CategoryLabel`] — `<count>-<element>-<content>` category key
//! - [`DistanceMatrix`] — Pairwise Manhattan distances
//!
//! ## Configuration
//!
//! - [`CompositionConfig`] — Alloy window and percentage scale
//! - [`FeatureConfig`] — Operators and scratch directory

mod config;
mod curate;
mod error;
mod feature;
mod formula;
mod model;

pub mod progress;

pub use model::types::{Element, ParseElementError};

pub use model::attribute::{AttributeRow, AttributeTable};
pub use model::composition::{Basis, CompositionTable, CompositionVector, FormulaFailure};
pub use model::dataset::{Dataset, Entry};
pub use model::distance::DistanceMatrix;
pub use model::feature::{FeatureColumn, FeatureId, FeatureTable};
pub use model::registry::ElementRegistry;

pub use config::{CompositionConfig, FeatureConfig};
pub use error::Error;

pub use formula::{
    Composition, CompositionBuilder, ParseFormulaError, is_valid_formula, parse_formula,
};

pub use feature::{
    Aggregate, CorrelationMatrix, FeatureEngine, Operator, ParseOperatorError,
    correlation_matrix, delete_unusable,
};

pub use curate::{Category, CategoryLabel, DatasetCurator, ParseCategoryError};
