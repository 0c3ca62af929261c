use crate::model::composition::CompositionTable;
use crate::model::distance::DistanceMatrix;
use tracing::debug;

/// Manhattan distances between every formula of `rows` and every formula
/// of `columns`, over the shared registry columns.
pub(super) fn manhattan(rows: &CompositionTable, columns: &CompositionTable) -> DistanceMatrix {
    let mut values = Vec::with_capacity(rows.len() * columns.len());
    for (_, a) in rows.iter() {
        for (_, b) in columns.iter() {
            values.push(a.manhattan(b));
        }
    }

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        "computed composition distances"
    );

    DistanceMatrix::new(
        rows.formulas().to_vec(),
        columns.formulas().to_vec(),
        values,
    )
}
