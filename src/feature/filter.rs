use crate::model::feature::FeatureTable;
use tracing::info;

/// Drops feature columns that cannot discriminate between formulas.
///
/// A column is dropped when its variance over all formulas is zero, which
/// includes columns with no defined cell at all. Undefined cells in the
/// remaining columns are kept as they are; nothing is imputed.
pub fn delete_unusable(features: &FeatureTable) -> FeatureTable {
    let (formulas, columns, empty_attributes) = features.clone().into_parts();
    let before = columns.len();

    let usable: Vec<_> = columns
        .into_iter()
        .filter(|c| c.variance().is_some_and(|v| v > 0.0))
        .collect();

    info!(
        entries = formulas.len(),
        usable = usable.len(),
        dropped = before - usable.len(),
        "deleted unusable features"
    );

    FeatureTable::new(formulas, usable, empty_attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Operator;
    use crate::model::feature::{FeatureColumn, FeatureId};

    fn column(attribute: &str, values: Vec<Option<f64>>) -> FeatureColumn {
        FeatureColumn {
            id: FeatureId::new(attribute, Operator::Avg),
            values,
        }
    }

    #[test]
    fn drops_constant_and_empty_columns() {
        let table = FeatureTable::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                column("varying", vec![Some(1.0), Some(2.0), Some(3.0)]),
                column("constant", vec![Some(0.1), Some(0.1), Some(0.1)]),
                column("empty", vec![None, None, None]),
                column("sparse", vec![Some(1.0), None, Some(5.0)]),
                column("sparse_constant", vec![Some(7.0), None, Some(7.0)]),
            ],
            vec!["empty".into()],
        );

        let usable = delete_unusable(&table);
        assert_eq!(usable.column_names(), vec!["varying.avg", "sparse.avg"]);
        assert_eq!(usable.formulas(), table.formulas());
        assert_eq!(usable.value("b", "sparse.avg"), None);
        assert_eq!(usable.empty_attributes(), &["empty".to_string()]);
    }

    #[test]
    fn single_formula_tables_keep_nothing() {
        let table = FeatureTable::new(
            vec!["a".into()],
            vec![column("x", vec![Some(4.0)])],
            vec![],
        );
        assert_eq!(delete_unusable(&table).column_count(), 0);
    }
}
