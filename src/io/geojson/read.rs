//! GeoJSON reading operations.

use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::district::{DistrictGeometry, DistrictId};

/// Read district geometries from GeoJSON bytes.
///
/// Each feature must carry its district id in `properties[id_property]`
/// (number or numeric string) and a Polygon or MultiPolygon geometry.
pub(crate) fn read_from_geojson_bytes(bytes: &[u8], id_property: &str) -> Result<Vec<DistrictGeometry>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson::read] Failed to parse GeoJSON bytes")?;
    read_from_geojson_value(&value, id_property)
}

/// Read district geometries from a parsed GeoJSON FeatureCollection.
pub(crate) fn read_from_geojson_value(value: &Value, id_property: &str) -> Result<Vec<DistrictGeometry>> {
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson::read] Expected a FeatureCollection with a 'features' array"))?;

    features.iter().enumerate()
        .map(|(idx, feature)| {
            read_feature(feature, id_property)
                .with_context(|| format!("[io::geojson::read] Invalid feature at index {idx}"))
        })
        .collect()
}

fn read_feature(feature: &Value, id_property: &str) -> Result<DistrictGeometry> {
    let properties = &feature["properties"];
    let id = parse_district_id(&properties[id_property])
        .ok_or_else(|| anyhow!("missing or invalid '{id_property}' property"))?;

    let geometry = &feature["geometry"];
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("district {id}: geometry has no coordinates"))?;
    let shape = match geometry["type"].as_str() {
        Some("Polygon") => MultiPolygon(vec![parse_polygon_coords(coords)?]),
        Some("MultiPolygon") => parse_multipolygon_coords(coords)?,
        Some(other) => bail!("district {id}: unsupported geometry type '{other}'"),
        None => bail!("district {id}: geometry has no type"),
    };

    let geometry = DistrictGeometry::new(id, shape);
    Ok(match properties["name"].as_str() {
        Some(name) => geometry.with_name(name),
        None => geometry,
    })
}

/// District ids appear as JSON numbers or numeric strings.
pub(crate) fn parse_district_id(value: &Value) -> Option<DistrictId> {
    match value {
        Value::Number(number) => number.as_u64()
            .and_then(|id| u32::try_from(id).ok())
            .map(DistrictId::new)
            .or_else(|| DistrictId::parse(&number.to_string())),
        Value::String(text) => DistrictId::parse(text),
        _ => None,
    }
}

/// Parse GeoJSON MultiPolygon coordinates: [polygon, polygon, ...].
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    coords.iter()
        .map(|polygon| {
            let rings = polygon.as_array()
                .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon is not an array"))?;
            parse_polygon_coords(rings)
        })
        .collect::<Result<Vec<_>>>()
        .map(MultiPolygon)
}

/// Parse GeoJSON Polygon coordinates: [exterior, hole, hole, ...].
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter()
        .map(|ring| {
            let ring = ring.as_array()
                .ok_or_else(|| anyhow!("Invalid Polygon: ring is not an array"))?;
            parse_ring_coords(ring)
        });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON coordinates: [[x, y], [x, y], ...].
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = coords.iter()
        .map(|pair| {
            let x = pair[0].as_f64()
                .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
            let y = pair[1].as_f64()
                .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
