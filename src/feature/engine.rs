use super::operator::Aggregate;
use super::scratch::{FeatureChunk, ScratchStore};
use crate::config::FeatureConfig;
use crate::error::Error;
use crate::model::attribute::{AttributeRow, AttributeTable};
use crate::model::composition::CompositionTable;
use crate::model::feature::{FeatureColumn, FeatureId, FeatureTable};
use crate::progress::{ProgressObserver, SilentProgress};
use std::collections::HashSet;
use tracing::{info, warn};

/// Aggregates per-element attributes into per-formula features.
///
/// Every attribute is combined with every configured
/// [`Operator`](super::Operator), producing columns named
/// `<attribute>.<operator>`. Attributes are processed one at a time and
/// staged in a [`ScratchStore`], so peak memory holds a single attribute's
/// columns plus the final table.
#[derive(Debug, Clone)]
pub struct FeatureEngine<'a> {
    attributes: &'a AttributeTable,
    config: FeatureConfig,
}

impl<'a> FeatureEngine<'a> {
    pub fn new(attributes: &'a AttributeTable) -> Self {
        Self {
            attributes,
            config: FeatureConfig::default(),
        }
    }

    /// Replaces the configuration. Repeated operators are dropped, keeping
    /// the first occurrence, so every column name is unique.
    pub fn with_config(mut self, mut config: FeatureConfig) -> Self {
        let mut seen = HashSet::new();
        config.operators.retain(|op| seen.insert(*op));
        self.config = config;
        self
    }

    /// Computes the full feature table for `composition`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scratch`] or [`Error::ScratchEncoding`] if the
    /// scratch store cannot be written or read back.
    pub fn compute(&self, composition: &CompositionTable) -> Result<FeatureTable, Error> {
        self.compute_with_progress(composition, &mut SilentProgress::new())
    }

    /// Like [`compute`](Self::compute), reporting one update per attribute.
    pub fn compute_with_progress(
        &self,
        composition: &CompositionTable,
        progress: &mut dyn ProgressObserver,
    ) -> Result<FeatureTable, Error> {
        let rows = self.attributes.rows();
        let total = rows.len();

        // composition column -> attribute column, by element
        let columns: Vec<Option<usize>> = composition
            .elements()
            .iter()
            .map(|&el| self.attributes.registry().index_of(el))
            .collect();

        info!(
            attributes = total,
            entries = composition.len(),
            operators = self.config.operators.len(),
            "computing features"
        );

        let mut scratch = ScratchStore::create(self.config.scratch_dir.as_deref())?;
        let mut empty_attributes = Vec::new();

        for (done, row) in rows.iter().enumerate() {
            let chunk = if row.is_undefined() {
                warn!(
                    attribute = row.name(),
                    "attribute is undefined for every element; its features are undefined"
                );
                empty_attributes.push(row.name().to_string());
                self.undefined_chunk(row, composition.len())
            } else {
                self.aggregate_chunk(row, composition, &columns)
            };

            scratch.write(&chunk)?;
            progress.update(done + 1, total);
        }

        let feature_columns = scratch.finish()?;
        progress.finish();

        Ok(FeatureTable::new(
            composition.formulas().to_vec(),
            feature_columns,
            empty_attributes,
        ))
    }

    fn empty_columns(&self, row: &AttributeRow, capacity: usize) -> Vec<FeatureColumn> {
        self.config
            .operators
            .iter()
            .map(|&op| FeatureColumn {
                id: FeatureId::new(row.name(), op),
                values: Vec::with_capacity(capacity),
            })
            .collect()
    }

    fn undefined_chunk(&self, row: &AttributeRow, formulas: usize) -> FeatureChunk {
        let mut columns = self.empty_columns(row, formulas);
        for column in &mut columns {
            column.values.resize(formulas, None);
        }
        FeatureChunk {
            attribute: row.name().to_string(),
            columns,
        }
    }

    fn aggregate_chunk(
        &self,
        row: &AttributeRow,
        composition: &CompositionTable,
        columns: &[Option<usize>],
    ) -> FeatureChunk {
        let values = row.values();
        let mut feature_columns = self.empty_columns(row, composition.len());

        for (_, vector) in composition.iter() {
            let pairs = vector.present().filter_map(|(col, weight)| {
                columns[col]
                    .and_then(|a| values[a])
                    .map(|value| (weight, value))
            });
            let aggregate = Aggregate::from_pairs(pairs);

            for column in &mut feature_columns {
                let value = aggregate
                    .as_ref()
                    .and_then(|agg| column.id.operator.apply(agg));
                column.values.push(value);
            }
        }

        FeatureChunk {
            attribute: row.name().to_string(),
            columns: feature_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Operator;
    use crate::formula::CompositionBuilder;
    use crate::model::registry::ElementRegistry;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn registry() -> ElementRegistry {
        ElementRegistry::from_symbols(["H", "O", "Fe", "Ni"]).unwrap()
    }

    fn scratch_config(parent: &tempfile::TempDir) -> FeatureConfig {
        FeatureConfig {
            scratch_dir: Some(parent.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn seven_columns_per_attribute_in_operator_order() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["H2O1"]).unwrap();
        let attrs = AttributeTable::new(
            &reg,
            [("en".to_string(), vec![Some(1.0), Some(4.0), None, None])],
        )
        .unwrap();
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        assert_eq!(
            table.column_names(),
            vec!["en.sum", "en.avg", "en.wavg", "en.max", "en.min", "en.range", "en.std"]
        );
        assert_eq!(table.value("H2O1", "en.sum"), Some(5.0));
        assert_eq!(table.value("H2O1", "en.avg"), Some(2.5));
        assert!(approx_eq(table.value("H2O1", "en.wavg").unwrap(), 2.0, 1e-12));
        assert_eq!(table.value("H2O1", "en.range"), Some(3.0));
        assert!(approx_eq(table.value("H2O1", "en.std").unwrap(), 1.5, 1e-12));
        assert!(table.empty_attributes().is_empty());
    }

    #[test]
    fn undefined_values_are_skipped_not_zero_filled() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["Fe1O3"]).unwrap();
        let attrs = AttributeTable::new(
            &reg,
            [("r".to_string(), vec![Some(0.3), Some(0.6), None, Some(1.2)])],
        )
        .unwrap();
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        // only O contributes; Fe is undefined and Ni/H are absent
        for op in ["sum", "avg", "wavg", "max", "min"] {
            let v = table.value("Fe1O3", &format!("r.{op}")).unwrap();
            assert!(approx_eq(v, 0.6, 1e-12), "{op} = {v}");
        }
        assert_eq!(table.value("Fe1O3", "r.range"), Some(0.0));
        assert_eq!(table.value("Fe1O3", "r.std"), Some(0.0));
    }

    #[test]
    fn formula_without_defined_values_yields_undefined() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["Fe1Ni1", "H2O1"]).unwrap();
        let attrs = AttributeTable::new(
            &reg,
            [("x".to_string(), vec![Some(1.0), Some(2.0), None, None])],
        )
        .unwrap();
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        for column in table.columns() {
            assert_eq!(column.values[0], None, "{}", column.name());
            assert!(column.values[1].is_some(), "{}", column.name());
        }
    }

    #[test]
    fn fully_undefined_attribute_short_circuits() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg)
            .build(["H2O1", "Fe50Ni50"])
            .unwrap();
        let attrs = AttributeTable::new(
            &reg,
            [
                ("blank".to_string(), vec![None; 4]),
                ("z".to_string(), vec![Some(1.0), Some(8.0), Some(26.0), Some(28.0)]),
            ],
        )
        .unwrap();
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        assert_eq!(table.empty_attributes(), &["blank".to_string()]);
        assert_eq!(table.column_count(), 14);
        for column in table.columns().iter().filter(|c| c.id.attribute == "blank") {
            assert!(column.values.iter().all(Option::is_none));
        }
        assert_eq!(table.value("Fe50Ni50", "z.max"), Some(28.0));
    }

    #[test]
    fn sum_of_quantity_attribute_recovers_total() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["Fe2Ni3O4"]).unwrap();
        let quantities = reg
            .symbols()
            .iter()
            .map(|&el| comp.quantity("Fe2Ni3O4", el))
            .collect();
        let attrs = AttributeTable::new(&reg, [("quantity".to_string(), quantities)]).unwrap();
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        let total = comp.get("Fe2Ni3O4").unwrap().total();
        assert!(approx_eq(
            table.value("Fe2Ni3O4", "quantity.sum").unwrap(),
            total,
            1e-9
        ));
    }

    #[test]
    fn attribute_registry_may_differ_from_composition_registry() {
        let comp_reg = ElementRegistry::from_symbols(["Ni", "Fe"]).unwrap();
        let comp = CompositionBuilder::new(&comp_reg).build(["Fe1Ni3"]).unwrap();
        let attrs = AttributeTable::elemental(&ElementRegistry::periodic());
        let parent = tempfile::tempdir().unwrap();

        let table = FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        assert_eq!(table.value("Fe1Ni3", "atomic_number.min"), Some(26.0));
        assert_eq!(table.value("Fe1Ni3", "atomic_number.max"), Some(28.0));
        assert!(approx_eq(
            table.value("Fe1Ni3", "atomic_number.wavg").unwrap(),
            (26.0 + 3.0 * 28.0) / 4.0,
            1e-12
        ));
    }

    #[test]
    fn operator_subset_and_progress_reporting() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["H2O1"]).unwrap();
        let attrs = AttributeTable::elemental(&reg);
        let parent = tempfile::tempdir().unwrap();
        let config = FeatureConfig {
            operators: vec![Operator::Max, Operator::Min],
            scratch_dir: Some(parent.path().to_path_buf()),
        };

        let mut updates = Vec::new();
        let mut observer = |done: usize, total: usize| updates.push((done, total));
        let table = FeatureEngine::new(&attrs)
            .with_config(config)
            .compute_with_progress(&comp, &mut observer)
            .unwrap();

        assert_eq!(
            table.column_names(),
            vec![
                "atomic_number.max",
                "atomic_number.min",
                "atomic_mass.max",
                "atomic_mass.min"
            ]
        );
        assert_eq!(updates, vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn repeated_operators_yield_one_column_each() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["H2O1"]).unwrap();
        let attrs = AttributeTable::elemental(&reg);
        let parent = tempfile::tempdir().unwrap();
        let config = FeatureConfig {
            operators: vec![Operator::Max, Operator::Sum, Operator::Max, Operator::Sum],
            scratch_dir: Some(parent.path().to_path_buf()),
        };

        let table = FeatureEngine::new(&attrs)
            .with_config(config)
            .compute(&comp)
            .unwrap();

        assert_eq!(
            table.column_names(),
            vec![
                "atomic_number.max",
                "atomic_number.sum",
                "atomic_mass.max",
                "atomic_mass.sum"
            ]
        );
    }

    #[test]
    fn scratch_directory_is_released() {
        let reg = registry();
        let comp = CompositionBuilder::new(&reg).build(["H2O1"]).unwrap();
        let attrs = AttributeTable::elemental(&reg);
        let parent = tempfile::tempdir().unwrap();

        FeatureEngine::new(&attrs)
            .with_config(scratch_config(&parent))
            .compute(&comp)
            .unwrap();

        let leftovers = std::fs::read_dir(parent.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
