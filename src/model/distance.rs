/// Pairwise distances between the formulas of two datasets.
///
/// Rows are the formulas of the first dataset and columns those of the
/// second (or of the first again for an intra-dataset matrix). Cells are
/// never undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn new(rows: Vec<String>, columns: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows.len() * columns.len());
        Self {
            rows,
            columns,
            values,
        }
    }

    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Distance between row `i` and column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.columns.len() + j]
    }

    /// Distance between two formulas by id.
    pub fn between(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.rows.iter().position(|f| f == row)?;
        let j = self.columns.iter().position(|f| f == column)?;
        Some(self.get(i, j))
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.columns.len();
        &self.values[i * n..(i + 1) * n]
    }

    /// Harmonic mean of the distances from each row formula to all column
    /// formulas.
    ///
    /// A zero distance (the formula also occurs in the other dataset) makes
    /// the row mean zero. Rows of a matrix with no columns are `None`.
    pub fn harmonic_row_means(&self) -> Vec<Option<f64>> {
        (0..self.rows.len())
            .map(|i| harmonic_mean(self.row(i)))
            .collect()
    }

    /// Harmonic mean of [`harmonic_row_means`](Self::harmonic_row_means).
    ///
    /// A single-number summary of how far the row dataset lies from the
    /// column dataset in composition space.
    pub fn extrapolation_distance(&self) -> Option<f64> {
        let means: Vec<f64> = self.harmonic_row_means().into_iter().flatten().collect();
        harmonic_mean(&means)
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }
}

fn harmonic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.iter().any(|&d| d == 0.0) {
        return Some(0.0);
    }
    let reciprocal_sum: f64 = values.iter().map(|d| 1.0 / d).sum();
    Some(values.len() as f64 / reciprocal_sum)
}
