use super::category::{Category, CategoryLabel};
use super::compare_property;
use crate::model::dataset::{Dataset, Entry};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::info;

/// Picks the member with the greatest first property from every category.
///
/// Categories are visited in ascending label order. Within a category ties
/// go to the smallest formula id. A formula picked by several categories
/// appears once; the result is ordered by formula id.
pub(super) fn subset(
    columns: &[String],
    categories: &BTreeMap<CategoryLabel, Category>,
) -> Dataset {
    let mut picks: BTreeMap<&str, &Vec<f64>> = BTreeMap::new();

    for members in categories.values() {
        if let Some((formula, values)) = representative(members) {
            picks.insert(formula, values);
        }
    }

    info!(
        categories = categories.len(),
        selected = picks.len(),
        "built category subset"
    );

    Dataset::with_entries(
        columns.to_vec(),
        picks
            .into_iter()
            .map(|(formula, values)| Entry::new(formula, values.clone()))
            .collect(),
    )
}

fn representative(members: &Category) -> Option<(&str, &Vec<f64>)> {
    let mut best: Option<(&str, &Vec<f64>)> = None;
    for (formula, values) in members {
        let replace = match best {
            None => true,
            Some((_, current)) => primary_order(values, current) == Ordering::Greater,
        };
        if replace {
            best = Some((formula.as_str(), values));
        }
    }
    best
}

fn primary_order(a: &[f64], b: &[f64]) -> Ordering {
    match (a.first(), b.first()) {
        (Some(&x), Some(&y)) => compare_property(x, y),
        _ => Ordering::Equal,
    }
}
