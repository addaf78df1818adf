pub(crate) mod csv;
pub(crate) mod geojson;
