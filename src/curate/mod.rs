//! Dataset curation keyed by formula id.
//!
//! [`DatasetCurator`] works on [`Dataset`]s whose first property column is
//! the primary ranking column:
//!
//! - [`deduplicate`](DatasetCurator::deduplicate) — One row per formula, the
//!   one with the greatest property values
//! - [`categorize`](DatasetCurator::categorize) — Groups rows by
//!   `<element count>-<element>-<content>` labels
//! - [`subset`](DatasetCurator::subset) — Keeps the best row of each category
//! - [`distances`](DatasetCurator::distances) — Manhattan distances in
//!   composition space

mod category;
mod dedup;
mod distance;
mod subset;

pub use category::{Category, CategoryLabel, ParseCategoryError};

use crate::config::CompositionConfig;
use crate::error::Error;
use crate::formula::CompositionBuilder;
use crate::model::composition::CompositionTable;
use crate::model::dataset::Dataset;
use crate::model::distance::DistanceMatrix;
use crate::model::registry::ElementRegistry;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Orders property values with NaN below every number.
pub(crate) fn compare_property(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Curates property datasets over one element registry.
///
/// # Examples
///
/// ```
/// use formula_forge::{Dataset, DatasetCurator, ElementRegistry};
///
/// let registry = ElementRegistry::periodic();
/// let curator = DatasetCurator::new(&registry);
///
/// let mut data = Dataset::new(["tc"]);
/// data.push("Fe2O3", vec![10.0])?;
/// data.push("Fe2O3", vec![20.0])?;
/// data.push("Fe60Ni40", vec![5.0])?;
///
/// let unique = curator.deduplicate(&data);
/// assert_eq!(unique.find("Fe2O3").unwrap().values, vec![20.0]);
///
/// let labels: Vec<String> = curator
///     .categorize(&unique)?
///     .keys()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(labels, ["2-O-3", "2-Fe-2", "2-Fe-60", "2-Ni-40"]);
/// # Ok::<(), formula_forge::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetCurator<'a> {
    registry: &'a ElementRegistry,
    config: CompositionConfig,
}

impl<'a> DatasetCurator<'a> {
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

    /// Keeps one row per formula id, preferring the greatest first column
    /// and breaking ties on the following columns.
    ///
    /// The result is sorted by formula id and keeps the input columns.
    pub fn deduplicate(&self, dataset: &Dataset) -> Dataset {
        dedup::deduplicate(dataset)
    }

    /// Groups dataset rows into composition categories.
    ///
    /// Alloy formulas are labelled by percent content, other formulas by
    /// atom count. Formulas that fail to parse are left out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidData`] if no formula parses.
    pub fn categorize(
        &self,
        dataset: &Dataset,
    ) -> Result<BTreeMap<CategoryLabel, Category>, Error> {
        let composition = self.compositions(dataset)?;
        Ok(category::categorize(
            dataset,
            &composition,
            self.config.percent_scale,
        ))
    }

    /// Selects the row with the greatest first property from each category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPropertyColumn`] for a dataset without
    /// property columns and [`Error::NoValidData`] if no formula parses.
    pub fn subset(&self, dataset: &Dataset) -> Result<Dataset, Error> {
        if dataset.columns().is_empty() {
            return Err(Error::MissingPropertyColumn);
        }
        let categories = self.categorize(dataset)?;
        Ok(subset::subset(dataset.columns(), &categories))
    }

    /// Manhattan distances between the formulas of `a` and those of `b`, or
    /// of `a` with itself when `b` is `None`.
    ///
    /// Rows and columns follow the first occurrence of each parsable formula.
    /// The intra-dataset matrix is symmetric with a zero diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidData`] if either dataset has no parsable
    /// formula.
    pub fn distances(&self, a: &Dataset, b: Option<&Dataset>) -> Result<DistanceMatrix, Error> {
        let rows = self.compositions(a)?;
        match b {
            Some(b) => {
                let columns = self.compositions(b)?;
                Ok(distance::manhattan(&rows, &columns))
            }
            None => Ok(distance::manhattan(&rows, &rows)),
        }
    }

    fn compositions(&self, dataset: &Dataset) -> Result<CompositionTable, Error> {
        CompositionBuilder::new(self.registry)
            .with_config(self.config)
            .build_dataset(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        let mut ds = Dataset::new(["tc"]);
        for (formula, value) in rows {
            ds.push(*formula, vec![*value]).unwrap();
        }
        ds
    }

    #[test]
    fn nan_ranks_below_numbers() {
        assert_eq!(compare_property(f64::NAN, -1e300), Ordering::Less);
        assert_eq!(compare_property(1.0, f64::NAN), Ordering::Greater);
        assert_eq!(compare_property(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(compare_property(2.0, 3.0), Ordering::Less);
    }

    #[test]
    fn deduplicate_keeps_larger_value() {
        let reg = ElementRegistry::periodic();
        let ds = dataset(&[("A1B1", 10.0), ("A1B1", 20.0)]);
        let out = DatasetCurator::new(&reg).deduplicate(&ds);
        assert_eq!(out.len(), 1);
        assert_eq!(out.entries()[0].values, vec![20.0]);
    }

    #[test]
    fn categorize_uses_last_row_for_repeated_ids() {
        let reg = ElementRegistry::periodic();
        let cats = DatasetCurator::new(&reg)
            .categorize(&dataset(&[("Cu1", 1.0), ("Cu1", 2.0)]))
            .unwrap();
        assert_eq!(cats.len(), 1);
        let label: CategoryLabel = "1-Cu-1".parse().unwrap();
        assert_eq!(cats[&label]["Cu1"], vec![2.0]);
    }

    #[test]
    fn categorize_skips_malformed_formulas() {
        let reg = ElementRegistry::periodic();
        let cats = DatasetCurator::new(&reg)
            .categorize(&dataset(&[("Fe2O3", 1.0), ("Xx9", 2.0)]))
            .unwrap();
        assert!(cats.values().all(|m| !m.contains_key("Xx9")));
        assert_eq!(cats.len(), 2);
    }

    #[test]
    fn subset_picks_best_per_category() {
        let reg = ElementRegistry::periodic();
        let ds = dataset(&[("Fe2O3", 1.0), ("Al2O3", 9.0), ("Fe60Ni40", 4.0)]);
        let out = DatasetCurator::new(&reg).subset(&ds).unwrap();
        let ids: Vec<&str> = out.formulas().collect();
        assert_eq!(ids, vec!["Al2O3", "Fe2O3", "Fe60Ni40"]);
    }

    #[test]
    fn subset_requires_a_property_column() {
        let reg = ElementRegistry::periodic();
        let ds = Dataset::from_formulas(["Fe2O3"]);
        assert!(matches!(
            DatasetCurator::new(&reg).subset(&ds),
            Err(Error::MissingPropertyColumn)
        ));
    }

    #[test]
    fn self_distances_match_explicit_pair() {
        let reg = ElementRegistry::periodic();
        let curator = DatasetCurator::new(&reg);
        let ds = dataset(&[("Fe2O3", 1.0), ("Fe60Ni40", 2.0), ("Cu1", 3.0), ("Fe2O3", 4.0)]);

        let single = curator.distances(&ds, None).unwrap();
        let paired = curator.distances(&ds, Some(&ds)).unwrap();
        assert_eq!(single, paired);
        assert_eq!(single.shape(), (3, 3));
        for i in 0..3 {
            assert_eq!(single.get(i, i), 0.0);
        }
    }

    #[test]
    fn overflowing_formula_does_not_poison_distances() {
        let reg = ElementRegistry::periodic();
        let huge = format!("Fe{}O1", "9".repeat(400));
        let ds = dataset(&[("Fe2O3", 1.0), (huge.as_str(), 2.0)]);

        let m = DatasetCurator::new(&reg).distances(&ds, None).unwrap();
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn distances_fail_without_valid_formulas() {
        let reg = ElementRegistry::periodic();
        let ds = dataset(&[("???", 1.0)]);
        assert!(matches!(
            DatasetCurator::new(&reg).distances(&ds, None),
            Err(Error::NoValidData { .. })
        ));
    }
}
