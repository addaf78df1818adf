//! Caller-supplied feature importance.

use serde::{Deserialize, Serialize};

use crate::{config::ScoringConfig, ScoreError};

/// One weight in [0, 1] per enabled feature, in config order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector {
    values: Vec<f64>,
}

impl WeightVector {
    /// Validate and wrap raw weights.
    pub fn new(values: Vec<f64>) -> Result<Self, ScoreError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, value)| !is_valid_weight(**value)) {
            return Err(ScoreError::WeightOutOfRange { index, value });
        }
        Ok(Self { values })
    }

    /// `len` copies of `value`.
    pub fn uniform(len: usize, value: f64) -> Result<Self, ScoreError> {
        Self::new(vec![value; len])
    }

    /// Every enabled feature at the configured default weight.
    pub fn reset(config: &ScoringConfig) -> Result<Self, ScoreError> {
        Self::uniform(config.num_enabled(), config.default_weight)
    }

    /// Start from [`reset`](Self::reset) and override features by name.
    pub fn from_named<I, S>(config: &ScoringConfig, named: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut weights = Self::reset(config)?;
        for (name, value) in named {
            let name = name.as_ref();
            let index = config.position(name)
                .ok_or_else(|| ScoreError::UnknownFeature(name.to_string()))?;
            weights.set(index, value)?;
        }
        Ok(weights)
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), ScoreError> {
        if index >= self.values.len() {
            return Err(ScoreError::ShapeMismatch { what: "weights", expected: index + 1, found: self.values.len() });
        }
        if !is_valid_weight(value) {
            return Err(ScoreError::WeightOutOfRange { index, value });
        }
        self.values[index] = value;
        Ok(())
    }

    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    #[inline] pub fn as_slice(&self) -> &[f64] { &self.values }

    #[inline] pub fn sum(&self) -> f64 { self.values.iter().sum() }

    /// True when no feature carries any weight.
    #[inline] pub fn is_zero(&self) -> bool { self.values.iter().all(|&w| w == 0.0) }
}

#[inline]
fn is_valid_weight(value: f64) -> bool { (0.0..=1.0).contains(&value) }
