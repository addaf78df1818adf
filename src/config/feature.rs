use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a higher raw value makes a district more or less livable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Direct,
    Inverse,
}

/// Grouping used when presenting features to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Property,
    Amenities,
    Transportation,
    Population,
}

impl Category {
    pub fn to_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Property => "property",
            Category::Amenities => "amenities",
            Category::Transportation => "transportation",
            Category::Population => "population",
        }
    }
}

/// A single scoring input. The column `name` must exist in the district table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    pub label: String,
    pub category: Category,
    #[serde(default)]
    pub polarity: Polarity,
    /// Count feature divided by district area before normalization.
    #[serde(default)]
    pub density: bool,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool { true }

impl FeatureSpec {
    /// A direct, non-density feature.
    pub fn new(name: &str, label: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            category,
            polarity: Polarity::Direct,
            density: false,
            enabled: true,
        }
    }

    /// A count feature that is divided by district area.
    pub fn count(name: &str, label: &str, category: Category) -> Self {
        Self { density: true, ..Self::new(name, label, category) }
    }

    /// A feature where higher raw values are worse.
    pub fn inverse(name: &str, label: &str, category: Category) -> Self {
        Self { polarity: Polarity::Inverse, ..Self::new(name, label, category) }
    }

    #[inline] pub fn is_inverse(&self) -> bool { self.polarity == Polarity::Inverse }
}

impl fmt::Display for FeatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}", self.name, self.label, self.category.to_str())?;
        if self.density { write!(f, ", per area")?; }
        if self.is_inverse() { write!(f, ", inverse")?; }
        if !self.enabled { write!(f, ", disabled")?; }
        write!(f, ")")
    }
}
