use super::parser::{ParseFormulaError, parse_formula};
use crate::config::CompositionConfig;
use crate::error::Error;
use crate::model::composition::{Basis, CompositionTable, CompositionVector, FormulaFailure};
use crate::model::dataset::Dataset;
use crate::model::registry::ElementRegistry;
use tracing::{debug, info, warn};

/// Turns formula strings into a dense composition table.
#[derive(Debug, Clone)]
pub struct CompositionBuilder<'a> {
    registry: &'a ElementRegistry,
    config: CompositionConfig,
}

impl<'a> CompositionBuilder<'a> {
    pub fn new(registry: &'a ElementRegistry) -> Self {
        Self {
            registry,
            config: CompositionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompositionConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses one formula into a composition vector over the registry.
    ///
    /// Quantities summing to a value in the alloy window are divided by the
    /// configured percentage scale and tagged [`Basis::Fraction`].
    pub fn vector(&self, formula: &str) -> Result<CompositionVector, ParseFormulaError> {
        let composition = parse_formula(formula, self.registry)?;

        let total: f64 = composition.values().sum();
        let basis = if self.config.is_percentage(total) {
            Basis::Fraction
        } else {
            Basis::AtomicCount
        };

        let mut cells = vec![None; self.registry.len()];
        for (element, quantity) in composition {
            if let Some(col) = self.registry.index_of(element) {
                cells[col] = Some(match basis {
                    Basis::Fraction => quantity / self.config.percent_scale,
                    Basis::AtomicCount => quantity,
                });
            }
        }

        Ok(CompositionVector::new(cells, basis))
    }

    /// Builds a table from a sequence of formula ids.
    ///
    /// Blank entries are skipped and malformed formulas are recorded on the
    /// table; neither stops the batch. A repeated id yields a single row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidData`] when no formula could be parsed.
    pub fn build<'f>(
        &self,
        formulas: impl IntoIterator<Item = &'f str>,
    ) -> Result<CompositionTable, Error> {
        let mut table = CompositionTable::new(self.registry);
        let mut total = 0;

        for (index, formula) in formulas.into_iter().enumerate() {
            total += 1;

            if formula.trim().is_empty() {
                debug!(index, "skipping blank formula entry");
                table.record_skipped(index);
                continue;
            }

            match self.vector(formula) {
                Ok(vector) => {
                    table.insert(formula, vector);
                }
                Err(error) => {
                    warn!(index, formula, %error, "skipping malformed formula");
                    table.record_failure(FormulaFailure {
                        index,
                        formula: formula.to_string(),
                        error,
                    });
                }
            }
        }

        if table.is_empty() {
            return Err(Error::NoValidData {
                total,
                failed: table.failures().len(),
                skipped: table.skipped().len(),
            });
        }

        info!(
            entries = total,
            formulas = table.len(),
            malformed = table.failures().len(),
            blank = table.skipped().len(),
            "extracted compositions"
        );

        Ok(table)
    }

    /// Builds a table from the formula ids of a dataset.
    pub fn build_dataset(&self, dataset: &Dataset) -> Result<CompositionTable, Error> {
        self.build(dataset.formulas())
    }
}
