//! Flips "lower is better" features so every column shares one direction.

use ndarray::Axis;

use crate::{
    config::{Polarity, ScoringConfig},
    score::{NormalizedMatrix, OrientedMatrix},
    ScoreError,
};

/// Per-column polarities for the enabled features of `config`.
pub fn polarities(config: &ScoringConfig) -> Vec<Polarity> {
    config.enabled().map(|feature| feature.polarity).collect()
}

/// `1 - v`. Self-inverse.
#[inline]
pub fn invert(value: f64) -> f64 { 1.0 - value }

impl NormalizedMatrix {
    /// Invert every `Inverse` column. Consumes the normalized matrix, so
    /// orientation happens exactly once per normalization.
    pub fn orient(self, polarity: &[Polarity]) -> Result<OrientedMatrix, ScoreError> {
        let mut matrix = self.0;
        if polarity.len() != matrix.ncols() {
            return Err(ScoreError::ShapeMismatch { what: "feature polarities", expected: matrix.ncols(), found: polarity.len() });
        }

        for (mut column, _) in matrix.values.axis_iter_mut(Axis(1))
            .zip(polarity)
            .filter(|(_, polarity)| **polarity == Polarity::Inverse)
        {
            column.mapv_inplace(invert);
        }
        Ok(OrientedMatrix(matrix))
    }
}
