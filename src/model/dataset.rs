use crate::error::Error;

/// One dataset row: a formula id and its property values.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub formula: String,
    pub values: Vec<f64>,
}

impl Entry {
    pub fn new(formula: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            formula: formula.into(),
            values,
        }
    }

    /// Returns `true` for a blank formula id, which stands for a missing entry.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.formula.trim().is_empty()
    }

    /// Value of the primary (first) property column.
    #[inline]
    pub fn primary(&self) -> Option<f64> {
        self.values.first().copied()
    }
}

/// Formula-indexed table of numeric properties.
///
/// The first column is the primary target used for ranking and tie-breaks.
/// Repeated formula ids are tolerated; see
/// [`DatasetCurator::deduplicate`](crate::DatasetCurator::deduplicate).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    entries: Vec<Entry>,
}

impl Dataset {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            entries: Vec::new(),
        }
    }

    /// A dataset of bare formulas with no property columns.
    pub fn from_formulas<S: Into<String>>(formulas: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: Vec::new(),
            entries: formulas
                .into_iter()
                .map(|f| Entry::new(f, Vec::new()))
                .collect(),
        }
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCount`] if `values` does not match the columns.
    pub fn push(&mut self, formula: impl Into<String>, values: Vec<f64>) -> Result<(), Error> {
        let formula = formula.into();
        if values.len() != self.columns.len() {
            return Err(Error::column_count(formula, self.columns.len(), values.len()));
        }
        self.entries.push(Entry { formula, values });
        Ok(())
    }

    pub(crate) fn with_entries(columns: Vec<String>, entries: Vec<Entry>) -> Self {
        Self { columns, entries }
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn formulas(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.formula.as_str())
    }

    /// Last row with the given formula id.
    pub fn find(&self, formula: &str) -> Option<&Entry> {
        self.entries.iter().rev().find(|e| e.formula == formula)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
