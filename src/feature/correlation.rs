use crate::model::feature::{FeatureColumn, FeatureTable};

/// Symmetric Pearson correlation matrix between feature columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Option<f64>>,
}

impl CorrelationMatrix {
    /// Column names, which label both axes.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values[i * self.names.len() + j]
    }

    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        self.get(i, j)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Pearson correlation between every pair of feature columns.
///
/// Each coefficient uses only the formulas where both columns are defined.
/// It is undefined when fewer than two such formulas exist or when either
/// column is constant over them.
pub fn correlation_matrix(features: &FeatureTable) -> CorrelationMatrix {
    let columns = features.columns();
    let n = columns.len();
    let mut values = vec![None; n * n];

    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                pearson(&columns[i], &columns[i]).map(|_| 1.0)
            } else {
                pearson(&columns[i], &columns[j])
            };
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }

    CorrelationMatrix {
        names: features.column_names(),
        values,
    }
}

fn pearson(a: &FeatureColumn, b: &FeatureColumn) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .values
        .iter()
        .zip(&b.values)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let (x0, y0) = pairs[0];
    let constant_x = pairs.iter().all(|p| p.0 == x0);
    let constant_y = pairs.iter().all(|p| p.1 == y0);
    if constant_x || constant_y || var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Operator;
    use crate::model::feature::FeatureId;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn table(columns: Vec<(&str, Vec<Option<f64>>)>) -> FeatureTable {
        let rows = columns.first().map_or(0, |c| c.1.len());
        FeatureTable::new(
            (0..rows).map(|i| format!("f{i}")).collect(),
            columns
                .into_iter()
                .map(|(name, values)| FeatureColumn {
                    id: FeatureId::new(name, Operator::Sum),
                    values,
                })
                .collect(),
            vec![],
        )
    }

    #[test]
    fn perfectly_linear_columns() {
        let m = correlation_matrix(&table(vec![
            ("x", vec![Some(1.0), Some(2.0), Some(3.0)]),
            ("up", vec![Some(2.0), Some(4.0), Some(6.0)]),
            ("down", vec![Some(3.0), Some(2.0), Some(1.0)]),
        ]));
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(0, 0), Some(1.0));
        assert!(approx_eq(m.between("x.sum", "up.sum").unwrap(), 1.0, 1e-12));
        assert!(approx_eq(m.between("x.sum", "down.sum").unwrap(), -1.0, 1e-12));
        assert_eq!(m.get(1, 2), m.get(2, 1));
    }

    #[test]
    fn undefined_cells_are_pairwise_excluded() {
        let m = correlation_matrix(&table(vec![
            ("x", vec![Some(1.0), None, Some(2.0), Some(3.0)]),
            ("y", vec![Some(10.0), Some(99.0), Some(20.0), Some(30.0)]),
        ]));
        assert!(approx_eq(m.get(0, 1).unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn constant_or_short_columns_are_undefined() {
        let m = correlation_matrix(&table(vec![
            ("x", vec![Some(1.0), Some(2.0), None]),
            ("flat", vec![Some(5.0), Some(5.0), Some(5.0)]),
            ("lonely", vec![None, None, Some(1.0)]),
        ]));
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 1), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(2, 2), None);
    }
}
