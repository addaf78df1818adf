use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, prelude::{NamedFrom, Series}};
use serde_json::Value;

use crate::{
    io::{self, geojson::FeatureScore},
    score::{ScoreReport, ScoreTable},
    ScoreError,
};

impl ScoreTable {
    /// One row per district: id, every oriented feature, then `total_score`.
    pub fn to_dataframe(&self) -> Result<DataFrame, ScoreError> {
        let mut columns = Vec::with_capacity(self.features.len() + 2);
        columns.push(Series::new(
            "district".into(),
            self.rows.iter().map(|row| row.district.get()).collect::<Vec<_>>(),
        ).into());

        for (j, name) in self.features.iter().enumerate() {
            let values: Vec<Option<f64>> = self.rows.iter()
                .map(|row| row.features.get(j).copied().filter(|value| value.is_finite()))
                .collect();
            columns.push(Series::new(name.as_str().into(), values).into());
        }

        columns.push(Series::new(
            "total_score".into(),
            self.rows.iter().map(|row| row.total_score).collect::<Vec<_>>(),
        ).into());

        Ok(DataFrame::new(columns)?)
    }

    /// Write the table as CSV.
    pub fn write_to_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.to_dataframe()?;
        io::csv::write_csv(&mut df, path)
    }

    /// Render the table as CSV text.
    pub fn to_csv(&self) -> Result<String> {
        let mut df = self.to_dataframe()?;
        io::csv::write_csv_string(&mut df)
    }
}

impl ScoreReport {
    /// Add `total_score` and `rank` to the properties of every feature in a
    /// district GeoJSON FeatureCollection. Returns how many features matched.
    pub fn annotate_geojson(&self, value: &mut Value, id_property: &str) -> Result<usize> {
        let ranks: HashMap<_, _> = self.ranking.entries.iter()
            .map(|entry| (entry.district, entry.rank))
            .collect();
        let scores: HashMap<_, _> = self.table.rows.iter()
            .map(|row| (row.district, FeatureScore {
                total_score: row.total_score,
                rank: ranks.get(&row.district).copied(),
            }))
            .collect();
        io::geojson::annotate_scores(value, id_property, &scores)
    }

    /// Read district GeoJSON from `source`, annotate it, and write to `dest`.
    pub fn write_geojson(&self, source: &Path, dest: &Path, id_property: &str) -> Result<()> {
        let bytes = fs::read(source)
            .with_context(|| format!("[score::io] Failed to read GeoJSON file: {}", source.display()))?;
        let mut value: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("[score::io] Failed to parse GeoJSON file: {}", source.display()))?;
        self.annotate_geojson(&mut value, id_property)?;
        fs::write(dest, io::geojson::write_to_geojson_bytes(&value)?)
            .with_context(|| format!("[score::io] Failed to write GeoJSON file: {}", dest.display()))
    }
}
