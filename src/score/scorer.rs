use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::{FeatureSpec, ScoringConfig},
    district::{Dataset, LocationLabels},
    score::{
        aggregate, density, normalize, polarity, rank, FeatureMatrix, OrientedMatrix, Ranking,
        ScoreTable, WeightVector,
    },
    ScoreError,
};

/// A weight echoed back alongside its feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureWeight {
    pub name: String,
    pub label: String,
    pub weight: f64,
}

/// Everything produced by one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub table: ScoreTable,
    pub ranking: Ranking,
    pub weights: Vec<FeatureWeight>,
}

/// The scoring pipeline bound to one dataset.
///
/// Density adjustment, normalization and orientation depend only on the
/// dataset and config, so they run once in [`Scorer::new`]. [`Scorer::score`]
/// takes `&self` and holds no mutable state; each call reflects only the
/// weights it is given.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
    features: Vec<FeatureSpec>,
    matrix: OrientedMatrix,
    labels: LocationLabels,
}

impl Scorer {
    pub fn new(dataset: &Dataset, config: &ScoringConfig) -> Result<Self, ScoreError> {
        config.validate()?;

        let mut matrix = FeatureMatrix::from_dataset(dataset, config)?;
        density::adjust(&mut matrix, dataset.areas(), &density::density_flags(config))?;
        let matrix = normalize::min_max(matrix)
            .orient(&polarity::polarities(config))?;

        debug!(
            districts = matrix.matrix().nrows(),
            features = matrix.matrix().ncols(),
            "[score::scorer] Prepared feature matrix",
        );

        Ok(Self {
            config: config.clone(),
            features: config.enabled().cloned().collect(),
            matrix,
            labels: dataset.labels().clone(),
        })
    }

    #[inline] pub fn config(&self) -> &ScoringConfig { &self.config }

    /// Enabled features, in weight order.
    #[inline] pub fn features(&self) -> &[FeatureSpec] { &self.features }

    #[inline] pub fn matrix(&self) -> &OrientedMatrix { &self.matrix }

    /// Weights for the reset action: every feature at the configured default.
    pub fn reset_weights(&self) -> Result<WeightVector, ScoreError> {
        WeightVector::reset(&self.config)
    }

    /// Weights from `(feature name, weight)` pairs over the reset default.
    pub fn weights_from_named<I, S>(&self, named: I) -> Result<WeightVector, ScoreError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        WeightVector::from_named(&self.config, named)
    }

    /// Score and rank with the configured top-N.
    pub fn score(&self, weights: &WeightVector) -> Result<ScoreReport, ScoreError> {
        self.score_top(weights, self.config.top_n)
    }

    /// Score and rank, keeping the `top_n` best districts.
    pub fn score_top(&self, weights: &WeightVector, top_n: usize) -> Result<ScoreReport, ScoreError> {
        let table = aggregate::aggregate(&self.matrix, weights)?;
        let ranking = rank::rank(&table, &self.labels, top_n);

        if ranking.is_incomplete() {
            warn!(excluded = ?ranking.excluded, "[score::scorer] Districts with missing data left out of ranking");
        }

        let weights = self.features.iter()
            .zip(weights.as_slice())
            .map(|(feature, &weight)| FeatureWeight {
                name: feature.name.clone(),
                label: feature.label.clone(),
                weight,
            })
            .collect();

        Ok(ScoreReport { table, ranking, weights })
    }
}

/// Build a scorer for `dataset` and score it once.
pub fn score(dataset: &Dataset, config: &ScoringConfig, weights: &WeightVector) -> Result<ScoreReport, ScoreError> {
    Scorer::new(dataset, config)?.score(weights)
}
