use serde::{Deserialize, Serialize};

use super::feature::{Category, FeatureSpec, Polarity};

/// How population density takes part in the score.
/// `Inverse` treats sparser districts as more livable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopulationDensity {
    #[default]
    Inverse,
    Direct,
    Excluded,
}

impl PopulationDensity {
    pub const ALL: [PopulationDensity; 3] = [
        PopulationDensity::Inverse,
        PopulationDensity::Direct,
        PopulationDensity::Excluded,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            PopulationDensity::Inverse => "inverse",
            PopulationDensity::Direct => "direct",
            PopulationDensity::Excluded => "excluded",
        }
    }
}

/// The built-in feature catalogue, in source column order.
pub(crate) fn catalogue(population: PopulationDensity) -> Vec<FeatureSpec> {
    let mut density = FeatureSpec::new(
        "population_density", "Population Density (per sq km)", Category::Population);
    match population {
        PopulationDensity::Inverse => density.polarity = Polarity::Inverse,
        PopulationDensity::Direct => density.polarity = Polarity::Direct,
        PopulationDensity::Excluded => density.enabled = false,
    }

    vec![
        FeatureSpec::count("kindergarten", "Kindergarten", Category::Education),
        FeatureSpec::count("primary_school", "Primary School", Category::Education),
        FeatureSpec::count("secondary_school", "Secondary School", Category::Education),
        FeatureSpec::inverse("psf_private", "Average PSF (Private Property)", Category::Property),
        FeatureSpec::inverse("psf_hdb", "Average PSF (HDB)", Category::Property),
        FeatureSpec::count("transport", "Transportation Availability", Category::Transportation),
        FeatureSpec::count("gym", "Gyms", Category::Amenities),
        FeatureSpec::count("supermarket", "Supermarkets", Category::Amenities),
        FeatureSpec::count("hawker_centre", "Hawker Centres", Category::Amenities),
        FeatureSpec::count("park", "Parks", Category::Amenities),
        FeatureSpec::count("pharmacy", "Pharmacies", Category::Amenities),
        density,
    ]
}
