//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::district::{DistrictId, LocationLabels};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Read district location labels from a DataFrame.
///
/// The DataFrame needs an id column and a `location` column; a district may
/// appear on several rows, one place name each.
pub(crate) fn read_location_labels(df: &DataFrame, id_column: &str) -> Result<LocationLabels> {
    ensure!(df.width() >= 2, "[io::csv::read] Label CSV must have two columns: {id_column},location");

    let ids = df.column(id_column)
        .with_context(|| format!("[io::csv::read] Label CSV has no '{id_column}' column"))?
        .cast(&DataType::String)?;
    let locations = df.column("location")
        .context("[io::csv::read] Label CSV has no 'location' column")?
        .cast(&DataType::String)?;

    let mut labels = LocationLabels::new();
    for (row, (id, location)) in ids.str()?.into_iter().zip(locations.str()?).enumerate() {
        let id = id.and_then(DistrictId::parse)
            .with_context(|| format!("[io::csv::read] Label CSV row {row} has no valid district id"))?;
        if let Some(location) = location {
            labels.insert(id, location);
        }
    }
    Ok(labels)
}
