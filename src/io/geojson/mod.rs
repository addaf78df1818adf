mod read;
mod write;

pub(crate) use read::{read_from_geojson_bytes, read_from_geojson_value};
pub(crate) use write::{annotate_scores, write_to_geojson_bytes, FeatureScore};
