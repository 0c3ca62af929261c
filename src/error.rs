//! Error types for composition building, featurization and curation.
//!
//! Formula-level and attribute-level problems are not errors here: they are
//! collected on the produced tables and the rest of the batch proceeds. The
//! variants below cover the conditions that stop a whole stage, such as a
//! dataset without a single valid formula or a scratch directory that cannot
//! be written.

use crate::model::types::{Element, ParseElementError};
use thiserror::Error;

/// Errors that can stop a featurization or curation stage.
#[derive(Debug, Error)]
pub enum Error {
    /// No formula in the input survived parsing.
    ///
    /// Downstream stages have nothing to work on, so this is surfaced
    /// explicitly instead of returning empty tables.
    #[error(
        "no valid data: none of the {total} formula entries could be parsed ({failed} malformed, {skipped} blank)"
    )]
    NoValidData {
        /// Number of entries seen.
        total: usize,
        /// Entries rejected by the formula parser.
        failed: usize,
        /// Blank entries that were skipped.
        skipped: usize,
    },

    /// An element symbol is not a known element.
    #[error(transparent)]
    UnknownElement(#[from] ParseElementError),

    /// An element was listed twice when building a registry.
    #[error("element '{0}' appears more than once in the registry")]
    DuplicateElement(Element),

    /// An attribute name was defined twice in one attribute table.
    #[error("attribute '{0}' is defined more than once")]
    DuplicateAttribute(String),

    /// An attribute row does not have one value per registry element.
    #[error("attribute '{name}' has {found} values but the registry has {expected} elements")]
    AttributeShape {
        /// Attribute name.
        name: String,
        /// Registry length.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// Failed to parse an attribute table from TOML.
    #[error("failed to parse attribute table: {0}")]
    AttributeParse(#[from] toml::de::Error),

    /// A dataset row does not have one value per property column.
    #[error("entry '{formula}' has {found} values but the dataset has {expected} columns")]
    ColumnCount {
        /// Formula id of the offending row.
        formula: String,
        /// Number of property columns.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },

    /// An operation needs a primary property column but the dataset has none.
    #[error("dataset has no property columns; a primary column is required for ranking")]
    MissingPropertyColumn,

    /// Reading or writing the feature scratch store failed.
    #[error("feature scratch storage failed: {0}")]
    Scratch(#[from] std::io::Error),

    /// A feature chunk could not be encoded or decoded.
    #[error("failed to encode feature chunk: {0}")]
    ScratchEncoding(#[from] serde_json::Error),

    /// A chunk written to the scratch store could not be found on reload.
    #[error("feature chunk for attribute '{0}' is missing from scratch storage")]
    ScratchMissing(String),
}

impl Error {
    /// Creates an [`AttributeShape`](Error::AttributeShape) error.
    pub fn attribute_shape(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::AttributeShape {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Creates a [`ColumnCount`](Error::ColumnCount) error.
    pub fn column_count(formula: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ColumnCount {
            formula: formula.into(),
            expected,
            found,
        }
    }
}
