use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::{config::ScoringConfig, district::{Dataset, DistrictId}, ScoreError};

/// Per-district feature values: one row per district, one column per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub(super) ids: Vec<DistrictId>,
    pub(super) features: Vec<String>,
    pub(super) values: Array2<f64>,
}

impl FeatureMatrix {
    pub fn new(ids: Vec<DistrictId>, features: Vec<String>, values: Array2<f64>) -> Result<Self, ScoreError> {
        if values.nrows() != ids.len() {
            return Err(ScoreError::ShapeMismatch { what: "matrix rows", expected: ids.len(), found: values.nrows() });
        }
        if values.ncols() != features.len() {
            return Err(ScoreError::ShapeMismatch { what: "matrix columns", expected: features.len(), found: values.ncols() });
        }
        Ok(Self { ids, features, values })
    }

    /// Build a matrix from row-major values.
    pub fn from_rows(ids: Vec<DistrictId>, features: Vec<String>, rows: &[Vec<f64>]) -> Result<Self, ScoreError> {
        let mut values = Array2::from_elem((rows.len(), features.len()), f64::NAN);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != features.len() {
                return Err(ScoreError::ShapeMismatch { what: "matrix columns", expected: features.len(), found: row.len() });
            }
            for (j, &value) in row.iter().enumerate() {
                values[[i, j]] = value;
            }
        }
        Self::new(ids, features, values)
    }

    /// Extract the enabled features of `config`, in config order.
    pub fn from_dataset(dataset: &Dataset, config: &ScoringConfig) -> Result<Self, ScoreError> {
        let features: Vec<String> = config.enabled().map(|feature| feature.name.clone()).collect();
        let mut values = Array2::from_elem((dataset.len(), features.len()), f64::NAN);
        for (j, name) in features.iter().enumerate() {
            let column = dataset.feature_column(name)?;
            values.column_mut(j).iter_mut()
                .zip(column)
                .for_each(|(cell, value)| *cell = value);
        }
        Self::new(dataset.ids().to_vec(), features, values)
    }

    #[inline] pub fn nrows(&self) -> usize { self.values.nrows() }

    #[inline] pub fn ncols(&self) -> usize { self.values.ncols() }

    #[inline] pub fn ids(&self) -> &[DistrictId] { &self.ids }

    #[inline] pub fn features(&self) -> &[String] { &self.features }

    #[inline] pub fn values(&self) -> ArrayView2<'_, f64> { self.values.view() }

    #[inline] pub fn row(&self, row: usize) -> ArrayView1<'_, f64> { self.values.row(row) }

    /// Values of one feature across all districts.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.features.iter()
            .position(|feature| feature == name)
            .map(|j| self.values.column(j))
    }
}

/// Feature values rescaled to [0, 1] per column. Produced only by
/// [`normalize::min_max`](super::normalize::min_max).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix(pub(super) FeatureMatrix);

/// Normalized values with every feature facing "higher is more livable".
/// Produced only by [`NormalizedMatrix::orient`], which consumes its input.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedMatrix(pub(super) FeatureMatrix);

impl NormalizedMatrix {
    #[inline] pub fn matrix(&self) -> &FeatureMatrix { &self.0 }
}

impl OrientedMatrix {
    #[inline] pub fn matrix(&self) -> &FeatureMatrix { &self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<DistrictId> { (1..=n).map(DistrictId::new).collect() }

    #[test]
    fn from_rows_keeps_layout() {
        let m = FeatureMatrix::from_rows(ids(2), vec!["a".into(), "b".into()],
            &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.row(1).to_vec(), vec![3.0, 4.0]);
        assert_eq!(m.column("b").unwrap().to_vec(), vec![2.0, 4.0]);
        assert!(m.column("c").is_none());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = FeatureMatrix::from_rows(ids(2), vec!["a".into(), "b".into()],
            &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, ScoreError::ShapeMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn new_rejects_row_count_mismatch() {
        let err = FeatureMatrix::new(ids(3), vec!["a".into()], Array2::zeros((2, 1))).unwrap_err();
        assert!(matches!(err, ScoreError::ShapeMismatch { what: "matrix rows", expected: 3, found: 2 }));
    }
}
