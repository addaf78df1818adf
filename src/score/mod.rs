//! The scoring pipeline:
//! density adjustment -> min-max normalization -> polarity -> weighted mean -> ranking.

pub mod aggregate;
pub mod density;
mod io;
mod matrix;
pub mod normalize;
pub mod polarity;
pub mod rank;
mod scorer;
mod weights;

pub use aggregate::{ScoreStatus, ScoreTable, ScoredDistrict};
pub use matrix::{FeatureMatrix, NormalizedMatrix, OrientedMatrix};
pub use rank::{Ranking, RankedDistrict, RankingStatus, DEFAULT_TOP_N};
pub use scorer::{score, FeatureWeight, ScoreReport, Scorer};
pub use weights::WeightVector;
