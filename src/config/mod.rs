//! Scoring configuration: the feature catalogue plus pipeline parameters.
//!
//! Polarity, density adjustment and inclusion are per-feature settings.

mod feature;
mod preset;

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ScoreError;

pub use feature::{Category, FeatureSpec, Polarity};
pub use preset::PopulationDensity;

/// How district polygon area is measured for density adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    /// Planar area in the squared units of the source coordinates.
    #[default]
    Planar,
    /// Geodesic area in km², for lon/lat input.
    Geodesic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// District id column in the feature table.
    #[serde(default = "default_id_column")]
    pub id_column: String,
    /// District id key in each GeoJSON feature's properties.
    #[serde(default = "default_id_property")]
    pub id_property: String,
    pub features: Vec<FeatureSpec>,
    #[serde(default)]
    pub area: AreaMethod,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Weight assigned to every feature on reset.
    #[serde(default)]
    pub default_weight: f64,
}

fn default_id_column() -> String { "district".to_string() }
fn default_id_property() -> String { "id".to_string() }
fn default_top_n() -> usize { 3 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::preset(PopulationDensity::default())
    }
}

impl ScoringConfig {
    /// A config over an explicit feature list, with default parameters.
    pub fn with_features(features: Vec<FeatureSpec>) -> Self {
        Self {
            id_column: default_id_column(),
            id_property: default_id_property(),
            features,
            area: AreaMethod::default(),
            top_n: default_top_n(),
            default_weight: 0.0,
        }
    }

    /// The built-in catalogue with the given population density handling.
    pub fn preset(population: PopulationDensity) -> Self {
        Self::with_features(preset::catalogue(population))
    }

    /// Enabled features, in pipeline order.
    pub fn enabled(&self) -> impl Iterator<Item = &FeatureSpec> {
        self.features.iter().filter(|feature| feature.enabled)
    }

    #[inline] pub fn num_enabled(&self) -> usize { self.enabled().count() }

    /// Position of `name` among the enabled features.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.enabled().position(|feature| feature.name == name)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.id_column.trim().is_empty() {
            return Err(ScoreError::InvalidConfig("id_column must not be empty".into()));
        }
        if self.num_enabled() == 0 {
            return Err(ScoreError::InvalidConfig("at least one feature must be enabled".into()));
        }
        if !(0.0..=1.0).contains(&self.default_weight) {
            return Err(ScoreError::InvalidConfig(
                format!("default_weight {} is outside [0, 1]", self.default_weight)));
        }

        let mut seen = HashSet::new();
        for feature in &self.features {
            if feature.name == self.id_column {
                return Err(ScoreError::InvalidConfig(
                    format!("feature '{}' shadows the id column", feature.name)));
            }
            if !seen.insert(feature.name.as_str()) {
                return Err(ScoreError::InvalidConfig(
                    format!("feature '{}' is listed more than once", feature.name)));
            }
        }
        Ok(())
    }

    /// Read and validate a config from a JSON file.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        let config: ScoringConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))?;
        config.validate()
            .with_context(|| format!("[config] Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write this config as pretty-printed JSON.
    pub fn write_to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("[config] Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("[config] Failed to write config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_is_valid() {
        let config = ScoringConfig::default();
        config.validate().unwrap();
        assert_eq!(config.num_enabled(), 12);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.default_weight, 0.0);
    }

    #[test]
    fn prices_are_inverse_counts_are_density() {
        let config = ScoringConfig::default();
        let get = |name: &str| config.features.iter().find(|f| f.name == name).unwrap();
        assert!(get("psf_private").is_inverse() && !get("psf_private").density);
        assert!(get("psf_hdb").is_inverse());
        assert!(get("gym").density && !get("gym").is_inverse());
        assert!(!get("population_density").density);
    }

    #[test]
    fn population_density_decision() {
        let polarity = |p| {
            let config = ScoringConfig::preset(p);
            config.features.iter().find(|f| f.name == "population_density").cloned().unwrap()
        };
        assert_eq!(polarity(PopulationDensity::Inverse).polarity, Polarity::Inverse);
        assert_eq!(polarity(PopulationDensity::Direct).polarity, Polarity::Direct);
        assert!(!polarity(PopulationDensity::Excluded).enabled);

        let excluded = ScoringConfig::preset(PopulationDensity::Excluded);
        assert_eq!(excluded.num_enabled(), 11);
        assert_eq!(excluded.position("population_density"), None);
        assert_eq!(excluded.position("pharmacy"), Some(10));
    }

    #[test]
    fn rejects_duplicate_features() {
        let mut config = ScoringConfig::default();
        config.features.push(FeatureSpec::new("gym", "Gyms again", Category::Amenities));
        assert!(matches!(config.validate(), Err(ScoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_feature_set() {
        let mut config = ScoringConfig::default();
        config.features.iter_mut().for_each(|f| f.enabled = false);
        assert!(matches!(config.validate(), Err(ScoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_default_weight_out_of_range() {
        let config = ScoringConfig { default_weight: 1.5, ..ScoringConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_fills_defaults() {
        let json = r#"{ "features": [
            { "name": "gym", "label": "Gyms", "category": "amenities", "density": true },
            { "name": "psf_hdb", "label": "PSF", "category": "property", "polarity": "inverse" }
        ] }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.id_column, "district");
        assert_eq!(config.id_property, "id");
        assert_eq!(config.area, AreaMethod::Planar);
        assert_eq!(config.top_n, 3);
        assert!(config.features.iter().all(|f| f.enabled));
        assert!(config.features[1].is_inverse());
        config.validate().unwrap();
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ScoringConfig {
            area: AreaMethod::Geodesic,
            top_n: 5,
            ..ScoringConfig::preset(PopulationDensity::Direct)
        };
        config.write_to_json(&path).unwrap();
        assert_eq!(ScoringConfig::read_from_json(&path).unwrap(), config);
    }
}
