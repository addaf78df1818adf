use polars::error::PolarsError;
use thiserror::Error;

use crate::district::DistrictId;

/// Errors raised while building a dataset or running the scoring pipeline.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("expected {expected} {what}, found {found}")]
    ShapeMismatch { what: &'static str, expected: usize, found: usize },

    #[error("weight #{index} is {value}, expected a value in [0, 1]")]
    WeightOutOfRange { index: usize, value: f64 },

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("column '{0}' not found in district table")]
    MissingColumn(String),

    #[error("row {row} has no valid district id in column '{column}'")]
    InvalidDistrictId { row: usize, column: String },

    #[error("district {0} appears more than once")]
    DuplicateDistrict(DistrictId),

    #[error("district {0} has no matching geometry")]
    MissingGeometry(DistrictId),

    #[error("geometry for district {0} has no matching record")]
    OrphanGeometry(DistrictId),

    #[error("district {district} has degenerate area {area}")]
    DegenerateArea { district: DistrictId, area: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
