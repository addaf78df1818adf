//! Per-column min-max normalization.

use ndarray::Axis;
use tracing::debug;

use crate::score::{FeatureMatrix, NormalizedMatrix};

/// Rescale every column to [0, 1] using the min and max over its defined
/// values. Missing (non-finite) values are excluded from the range and stay
/// NaN. A column whose defined values are all equal maps to 0.0.
pub fn min_max(mut matrix: FeatureMatrix) -> NormalizedMatrix {
    for (j, mut column) in matrix.values.axis_iter_mut(Axis(1)).enumerate() {
        let Some((min, max)) = column_range(column.iter().copied()) else {
            debug!(feature = %matrix.features[j], "[score::normalize] Column has no defined values");
            column.fill(f64::NAN);
            continue;
        };
        if max == min {
            debug!(feature = %matrix.features[j], value = min, "[score::normalize] Zero-variance column mapped to 0.0");
        }
        column.mapv_inplace(|value| normalize_value(value, min, max));
    }
    NormalizedMatrix(matrix)
}

/// Min and max over the finite values, or `None` if there are none.
pub fn column_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        })
}

/// `(value - min) / (max - min)`, clamped to [0, 1]. Zero range yields 0.0;
/// non-finite input yields NaN.
#[inline]
pub fn normalize_value(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        f64::NAN
    } else if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
