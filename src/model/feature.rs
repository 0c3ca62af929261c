//! Feature tables produced by the feature engine.

use crate::feature::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a feature as an (attribute, operator) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId {
    pub attribute: String,
    pub operator: Operator,
}

impl FeatureId {
    pub fn new(attribute: impl Into<String>, operator: Operator) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.attribute, self.operator)
    }
}

/// One feature column; `None` marks an undefined cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureColumn {
    pub id: FeatureId,
    pub values: Vec<Option<f64>>,
}

impl FeatureColumn {
    /// Column name in `<attribute>.<operator>` form.
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Population variance over the defined cells, or `None` if no cell is
    /// defined.
    ///
    /// A column whose defined cells are all equal has a variance of exactly
    /// `0.0`, whatever rounding the mean would introduce.
    pub fn variance(&self) -> Option<f64> {
        let defined: Vec<f64> = self.values.iter().flatten().copied().collect();
        let first = *defined.first()?;
        if defined.iter().all(|&x| x == first) {
            return Some(0.0);
        }
        let n = defined.len() as f64;
        let mean = defined.iter().sum::<f64>() / n;
        Some(defined.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n)
    }
}

/// Formula × feature matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    formulas: Vec<String>,
    columns: Vec<FeatureColumn>,
    empty_attributes: Vec<String>,
}

impl FeatureTable {
    pub(crate) fn new(
        formulas: Vec<String>,
        columns: Vec<FeatureColumn>,
        empty_attributes: Vec<String>,
    ) -> Self {
        Self {
            formulas,
            columns,
            empty_attributes,
        }
    }

    /// Row labels, in the order of the composition table.
    #[inline]
    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }

    #[inline]
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(FeatureColumn::name).collect()
    }

    /// Looks up a column by its `<attribute>.<operator>` name.
    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|c| {
            name.strip_prefix(c.id.attribute.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|op| op == c.id.operator.name())
        })
    }

    /// Cell value for `formula` in column `name`.
    pub fn value(&self, formula: &str, name: &str) -> Option<f64> {
        let row = self.formulas.iter().position(|f| f == formula)?;
        self.column(name)?.values[row]
    }

    /// Attributes that were undefined for every registry element.
    #[inline]
    pub fn empty_attributes(&self) -> &[String] {
        &self.empty_attributes
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.formulas.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<FeatureColumn>, Vec<String>) {
        (self.formulas, self.columns, self.empty_attributes)
    }
}
