#![doc = "Livability scoring public API"]
pub mod config;
pub mod district;
mod error;
mod io;
pub mod score;

#[doc(inline)]
pub use config::{AreaMethod, Category, FeatureSpec, Polarity, PopulationDensity, ScoringConfig};

#[doc(inline)]
pub use district::{Dataset, DistrictGeometry, DistrictId, LocationLabels};

#[doc(inline)]
pub use error::ScoreError;

#[doc(inline)]
pub use score::{Ranking, ScoreReport, ScoreTable, Scorer, WeightVector};
