//! Converts count features into per-area densities.

use ndarray::Axis;

use crate::{config::ScoringConfig, score::FeatureMatrix, ScoreError};

/// Per-column density flags for the enabled features of `config`.
pub fn density_flags(config: &ScoringConfig) -> Vec<bool> {
    config.enabled().map(|feature| feature.density).collect()
}

/// Divide every flagged column by the district's area.
///
/// `areas` is in matrix row order. Unflagged columns are left untouched.
pub fn adjust(matrix: &mut FeatureMatrix, areas: &[f64], density: &[bool]) -> Result<(), ScoreError> {
    if areas.len() != matrix.nrows() {
        return Err(ScoreError::ShapeMismatch { what: "district areas", expected: matrix.nrows(), found: areas.len() });
    }
    if density.len() != matrix.ncols() {
        return Err(ScoreError::ShapeMismatch { what: "density flags", expected: matrix.ncols(), found: density.len() });
    }
    if let Some((row, &area)) = areas.iter().enumerate().find(|(_, area)| !(area.is_finite() && **area > 0.0)) {
        return Err(ScoreError::DegenerateArea { district: matrix.ids[row], area });
    }

    for (mut column, _) in matrix.values.axis_iter_mut(Axis(1))
        .zip(density)
        .filter(|(_, flagged)| **flagged)
    {
        column.iter_mut()
            .zip(areas)
            .for_each(|(value, area)| *value /= area);
    }
    Ok(())
}
