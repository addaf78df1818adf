use std::sync::Arc;

use geo::{Area, GeodesicArea, MultiPolygon};

use crate::{config::AreaMethod, district::DistrictId};

/// A district boundary, used to measure area for density adjustment.
#[derive(Debug, Clone)]
pub struct DistrictGeometry {
    pub id: DistrictId,
    pub name: Option<Arc<str>>,
    pub shape: MultiPolygon<f64>,
}

impl DistrictGeometry {
    pub fn new(id: DistrictId, shape: MultiPolygon<f64>) -> Self {
        Self { id, name: None, shape }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(Arc::from(name));
        self
    }

    /// Area of the boundary. Geodesic areas are returned in km².
    pub fn area(&self, method: AreaMethod) -> f64 {
        match method {
            AreaMethod::Planar => self.shape.unsigned_area(),
            AreaMethod::Geodesic => self.shape.geodesic_area_unsigned() / 1.0e6,
        }
    }
}
