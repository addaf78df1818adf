//! GeoJSON writing operations.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use serde_json::{json, Value};

use crate::district::DistrictId;
use super::read::parse_district_id;

/// Per-district values attached to a GeoJSON feature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FeatureScore {
    pub total_score: Option<f64>,
    pub rank: Option<usize>,
}

/// Insert `total_score` and `rank` into every feature's properties.
///
/// Features whose id is unknown get nulls, so a renderer can still draw them.
/// Returns the number of features that matched a scored district.
pub(crate) fn annotate_scores(
    value: &mut Value,
    id_property: &str,
    scores: &HashMap<DistrictId, FeatureScore>,
) -> Result<usize> {
    let features = value.get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| anyhow!("[io::geojson::write] Expected a FeatureCollection with a 'features' array"))?;

    let mut matched = 0;
    for feature in features.iter_mut() {
        let score = parse_district_id(&feature["properties"][id_property])
            .and_then(|id| scores.get(&id));
        if score.is_some() { matched += 1 }

        let properties = feature.as_object_mut()
            .ok_or_else(|| anyhow!("[io::geojson::write] Feature is not an object"))?
            .entry("properties")
            .or_insert_with(|| json!({}));
        let properties = properties.as_object_mut()
            .ok_or_else(|| anyhow!("[io::geojson::write] Feature properties is not an object"))?;

        properties.insert("total_score".to_string(), json!(score.and_then(|s| s.total_score)));
        properties.insert("rank".to_string(), json!(score.and_then(|s| s.rank)));
    }
    Ok(matched)
}

/// Serialize GeoJSON to bytes.
pub(crate) fn write_to_geojson_bytes(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).context("[io::geojson::write] Failed to serialize GeoJSON to bytes")
}
