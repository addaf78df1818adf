mod dataset;
mod district_id;
mod geometry;
mod io;
mod labels;

pub use dataset::Dataset;
pub use district_id::DistrictId;
pub use geometry::DistrictGeometry;
pub use labels::LocationLabels;
