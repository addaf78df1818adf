//! Weighted-mean scalarization of the oriented feature matrix.
//!
//! For each district:
//!
//! ```text
//! total_score = sum_i weights[i] * feature_i / sum_i weights[i]
//! ```
//!
//! With a zero weight sum every district scores 0.0 and the table is marked
//! [`ScoreStatus::NoPreferences`].

use std::cmp::Ordering;

use ndarray::ArrayView1;
use serde::Serialize;

use crate::{
    district::DistrictId,
    score::{OrientedMatrix, WeightVector},
    ScoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreStatus {
    Scored,
    /// All weights were zero; every score is 0.0.
    NoPreferences,
}

/// A district after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDistrict {
    pub district: DistrictId,
    /// Oriented, normalized feature values in table feature order.
    pub features: Vec<f64>,
    /// `None` when a positively weighted feature is missing.
    pub total_score: Option<f64>,
}

/// Districts ordered by `total_score` descending, ties by ascending id,
/// undefined scores last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTable {
    pub features: Vec<String>,
    pub rows: Vec<ScoredDistrict>,
    pub status: ScoreStatus,
}

impl ScoreTable {
    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn get(&self, district: DistrictId) -> Option<&ScoredDistrict> {
        self.rows.iter().find(|row| row.district == district)
    }

    /// Districts without a defined score, by ascending id.
    pub fn incomplete(&self) -> Vec<DistrictId> {
        let mut ids: Vec<_> = self.rows.iter()
            .filter(|row| row.total_score.is_none())
            .map(|row| row.district)
            .collect();
        ids.sort();
        ids
    }
}

/// Score every district of `matrix` against `weights`.
pub fn aggregate(matrix: &OrientedMatrix, weights: &WeightVector) -> Result<ScoreTable, ScoreError> {
    let matrix = matrix.matrix();
    if weights.len() != matrix.ncols() {
        return Err(ScoreError::ShapeMismatch { what: "weights", expected: matrix.ncols(), found: weights.len() });
    }

    let total_weight = weights.sum();
    let status = if weights.is_zero() { ScoreStatus::NoPreferences } else { ScoreStatus::Scored };

    let mut rows: Vec<ScoredDistrict> = matrix.ids().iter().enumerate()
        .map(|(i, &district)| {
            let row = matrix.row(i);
            let total_score = match status {
                ScoreStatus::NoPreferences => Some(0.0),
                ScoreStatus::Scored => weighted_mean(row, weights.as_slice(), total_weight),
            };
            ScoredDistrict { district, features: row.to_vec(), total_score }
        })
        .collect();

    rows.sort_by(|a, b| by_score((a.district, a.total_score), (b.district, b.total_score)));

    Ok(ScoreTable { features: matrix.features().to_vec(), rows, status })
}

/// Weighted mean over positively weighted features. A missing value in any
/// of those makes the result undefined.
pub fn weighted_mean(row: ArrayView1<'_, f64>, weights: &[f64], total_weight: f64) -> Option<f64> {
    if total_weight <= 0.0 {
        return Some(0.0);
    }
    let mut weighted_sum = 0.0;
    for (&value, &weight) in row.iter().zip(weights) {
        if weight == 0.0 { continue }
        if !value.is_finite() { return None }
        weighted_sum += weight * value;
    }
    Some(weighted_sum / total_weight)
}

/// Score descending, then id ascending; undefined scores sort last.
pub(crate) fn by_score(a: (DistrictId, Option<f64>), b: (DistrictId, Option<f64>)) -> Ordering {
    match (a.1, b.1) {
        (Some(x), Some(y)) => y.total_cmp(&x).then(a.0.cmp(&b.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    }
}
