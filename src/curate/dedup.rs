use super::compare_property;
use crate::model::dataset::{Dataset, Entry};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::info;

/// Keeps one row per formula id: the one ranking highest by the first
/// column, then by each following column.
///
/// Rows are stably sorted ascending by all columns and then collected by
/// formula id with the later row winning, so the maximum survives. The
/// result is ordered by formula id.
pub(super) fn deduplicate(dataset: &Dataset) -> Dataset {
    let mut entries: Vec<&Entry> = dataset.entries().iter().collect();
    entries.sort_by(|a, b| compare_rows(&a.values, &b.values));

    let mut kept: BTreeMap<&str, &Entry> = BTreeMap::new();
    for entry in entries {
        kept.insert(entry.formula.as_str(), entry);
    }

    info!(
        original = dataset.len(),
        deduped = kept.len(),
        "deleted duplicate entries"
    );

    Dataset::with_entries(
        dataset.columns().to_vec(),
        kept.into_values().cloned().collect(),
    )
}

fn compare_rows(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| compare_property(x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
