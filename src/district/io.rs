use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    config::ScoringConfig,
    district::{Dataset, DistrictGeometry, LocationLabels},
    io,
};

impl Dataset {
    /// Load a dataset from a feature table CSV, a district GeoJSON file and
    /// an optional location-label CSV.
    pub fn read_from_files(
        table_path: &Path,
        geometry_path: &Path,
        labels_path: Option<&Path>,
        config: &ScoringConfig,
    ) -> Result<Self> {
        let data = io::csv::read_csv(table_path)?;
        let geometries = DistrictGeometry::read_from_geojson(geometry_path, &config.id_property)?;
        let labels = match labels_path {
            Some(path) => LocationLabels::read_from_csv(path, &config.id_column)?,
            None => LocationLabels::new(),
        };

        let dataset = Dataset::new(data, &geometries, labels, config)
            .with_context(|| format!(
                "[district::io] Failed to join {} with {}",
                table_path.display(),
                geometry_path.display(),
            ))?;

        info!(
            districts = dataset.len(),
            table = %table_path.display(),
            geometry = %geometry_path.display(),
            "[district::io] Loaded dataset",
        );
        Ok(dataset)
    }

    /// Build a dataset from in-memory CSV and GeoJSON text.
    pub fn from_strings(
        table_csv: &str,
        geometry_geojson: &str,
        labels_csv: Option<&str>,
        config: &ScoringConfig,
    ) -> Result<Self> {
        let data = io::csv::read_csv_string(table_csv)?;
        let geometries = io::geojson::read_from_geojson_bytes(geometry_geojson.as_bytes(), &config.id_property)?;
        let labels = match labels_csv {
            Some(csv) => {
                let df = io::csv::read_csv_string(csv)?;
                io::csv::read_location_labels(&df, &config.id_column)?
            }
            None => LocationLabels::new(),
        };
        Ok(Dataset::new(data, &geometries, labels, config)?)
    }
}

impl DistrictGeometry {
    /// Read every district boundary from a GeoJSON FeatureCollection file.
    pub fn read_from_geojson(path: &Path, id_property: &str) -> Result<Vec<Self>> {
        let bytes = fs::read(path)
            .with_context(|| format!("[district::io] Failed to read GeoJSON file: {}", path.display()))?;
        io::geojson::read_from_geojson_bytes(&bytes, id_property)
            .with_context(|| format!("[district::io] Failed to read districts from {}", path.display()))
    }
}

impl LocationLabels {
    /// Read district place names from a CSV with id and `location` columns.
    pub fn read_from_csv(path: &Path, id_column: &str) -> Result<Self> {
        let df = io::csv::read_csv(path)?;
        io::csv::read_location_labels(&df, id_column)
            .with_context(|| format!("[district::io] Failed to read labels from {}", path.display()))
    }
}
