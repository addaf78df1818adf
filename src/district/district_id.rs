use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key for a district across the feature table, geometry and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(u32);

impl DistrictId {
    #[inline] pub const fn new(id: u32) -> Self { Self(id) }

    #[inline] pub const fn get(self) -> u32 { self.0 }

    /// Parse an id from text as found in CSV cells and GeoJSON properties.
    /// Accepts integers ("7", " 07 ") and integral floats ("7.0").
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(id) = text.parse::<u32>() {
            return Some(Self(id));
        }
        let value = text.parse::<f64>().ok()?;
        (value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value))
            .then_some(Self(value as u32))
    }
}

impl From<u32> for DistrictId {
    fn from(id: u32) -> Self { Self(id) }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
