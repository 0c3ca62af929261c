//! Formula parsing and composition building.
//!
//! Formulas are bracket-free concatenations of element symbols, each
//! followed by a mandatory quantity (`"H2O1"`, `"Fe50Ni50"`). The
//! [`CompositionBuilder`] parses a batch of them into a
//! [`CompositionTable`](crate::CompositionTable), normalizing alloy
//! percentages and collecting malformed entries instead of failing.

mod builder;
mod parser;

pub use builder::CompositionBuilder;
pub use parser::{Composition, ParseFormulaError, is_valid_formula, parse_formula};
