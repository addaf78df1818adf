use std::collections::HashMap;

use polars::{frame::DataFrame, prelude::DataType};
use tracing::debug;

use crate::{
    config::ScoringConfig,
    district::{DistrictGeometry, DistrictId, LocationLabels},
    ScoreError,
};

/// The joined, validated district data a scorer works from.
///
/// Rows of `data`, entries of `ids` and entries of `areas` are aligned.
/// Geometry is reduced to its area at construction and not retained.
#[derive(Debug, Clone)]
pub struct Dataset {
    ids: Vec<DistrictId>,
    index: HashMap<DistrictId, usize>,
    data: DataFrame,
    areas: Vec<f64>,
    labels: LocationLabels,
}

impl Dataset {
    /// Join a feature table with district geometries.
    ///
    /// Every table row must have exactly one geometry with the same id and
    /// every geometry must have a row; a partial join is rejected.
    pub fn new(
        data: DataFrame,
        geometries: &[DistrictGeometry],
        labels: LocationLabels,
        config: &ScoringConfig,
    ) -> Result<Self, ScoreError> {
        config.validate()?;

        let ids = read_ids(&data, &config.id_column)?;
        let mut index = HashMap::with_capacity(ids.len());
        for (row, &id) in ids.iter().enumerate() {
            if index.insert(id, row).is_some() {
                return Err(ScoreError::DuplicateDistrict(id));
            }
        }

        let mut areas = vec![None; ids.len()];
        for geometry in geometries {
            let row = *index.get(&geometry.id)
                .ok_or(ScoreError::OrphanGeometry(geometry.id))?;
            if areas[row].is_some() {
                return Err(ScoreError::DuplicateDistrict(geometry.id));
            }
            let area = geometry.area(config.area);
            if !(area.is_finite() && area > 0.0) {
                return Err(ScoreError::DegenerateArea { district: geometry.id, area });
            }
            areas[row] = Some(area);
        }

        let areas = areas.into_iter()
            .zip(&ids)
            .map(|(area, &id)| area.ok_or(ScoreError::MissingGeometry(id)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(districts = ids.len(), labels = labels.len(), "[district::dataset] Joined table and geometry");

        Ok(Self { ids, index, data, areas, labels })
    }

    #[inline] pub fn len(&self) -> usize { self.ids.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// District ids in row order.
    #[inline] pub fn ids(&self) -> &[DistrictId] { &self.ids }

    /// District areas in row order.
    #[inline] pub fn areas(&self) -> &[f64] { &self.areas }

    #[inline] pub fn data(&self) -> &DataFrame { &self.data }

    #[inline] pub fn labels(&self) -> &LocationLabels { &self.labels }

    /// Row index of a district.
    #[inline] pub fn row_of(&self, id: DistrictId) -> Option<usize> { self.index.get(&id).copied() }

    /// Read a feature column as `f64`, with nulls as NaN.
    pub fn feature_column(&self, name: &str) -> Result<Vec<f64>, ScoreError> {
        let column = self.data.column(name)
            .map_err(|_| ScoreError::MissingColumn(name.to_string()))?
            .cast(&DataType::Float64)?;
        Ok(column.f64()?
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }
}

/// Parse the id column, accepting integer, float or string storage.
fn read_ids(data: &DataFrame, id_column: &str) -> Result<Vec<DistrictId>, ScoreError> {
    let column = data.column(id_column)
        .map_err(|_| ScoreError::MissingColumn(id_column.to_string()))?
        .cast(&DataType::String)?;

    column.str()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.and_then(DistrictId::parse)
                .ok_or_else(|| ScoreError::InvalidDistrictId { row, column: id_column.to_string() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::{polygon, MultiPolygon};
    use polars::prelude::{NamedFrom, Series};

    use super::*;
    use crate::config::{Category, FeatureSpec};

    fn square(id: u32, side: f64) -> DistrictGeometry {
        DistrictGeometry::new(DistrictId::new(id), MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: side, y: 0.0), (x: side, y: side), (x: 0.0, y: side),
        ]]))
    }

    fn table(ids: &[u32], gyms: &[Option<f64>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("district".into(), ids.to_vec()).into(),
            Series::new("gym".into(), gyms.to_vec()).into(),
        ]).unwrap()
    }

    fn config() -> ScoringConfig {
        ScoringConfig::with_features(vec![FeatureSpec::count("gym", "Gyms", Category::Amenities)])
    }

    #[test]
    fn joins_geometry_in_row_order() {
        let data = table(&[3, 1], &[Some(4.0), Some(2.0)]);
        let geoms = [square(1, 1.0), square(3, 2.0)];
        let dataset = Dataset::new(data, &geoms, LocationLabels::new(), &config()).unwrap();

        assert_eq!(dataset.ids(), &[DistrictId::new(3), DistrictId::new(1)]);
        assert_eq!(dataset.areas(), &[4.0, 1.0]);
        assert_eq!(dataset.row_of(DistrictId::new(1)), Some(1));
        assert_eq!(dataset.feature_column("gym").unwrap(), vec![4.0, 2.0]);
    }

    #[test]
    fn null_feature_values_read_as_nan() {
        let data = table(&[1, 2], &[Some(1.0), None]);
        let dataset = Dataset::new(data, &[square(1, 1.0), square(2, 1.0)], LocationLabels::new(), &config()).unwrap();
        let gyms = dataset.feature_column("gym").unwrap();
        assert_eq!(gyms[0], 1.0);
        assert!(gyms[1].is_nan());
    }

    #[test]
    fn rejects_record_without_geometry() {
        let data = table(&[1, 2], &[Some(1.0), Some(2.0)]);
        let err = Dataset::new(data, &[square(1, 1.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::MissingGeometry(id) if id == DistrictId::new(2)));
    }

    #[test]
    fn rejects_geometry_without_record() {
        let data = table(&[1], &[Some(1.0)]);
        let err = Dataset::new(data, &[square(1, 1.0), square(9, 1.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::OrphanGeometry(id) if id == DistrictId::new(9)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let data = table(&[1, 1], &[Some(1.0), Some(2.0)]);
        let err = Dataset::new(data, &[square(1, 1.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::DuplicateDistrict(_)));

        let data = table(&[1], &[Some(1.0)]);
        let err = Dataset::new(data, &[square(1, 1.0), square(1, 2.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::DuplicateDistrict(_)));
    }

    #[test]
    fn rejects_zero_area() {
        let data = table(&[1], &[Some(1.0)]);
        let err = Dataset::new(data, &[square(1, 0.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::DegenerateArea { area, .. } if area == 0.0));
    }

    #[test]
    fn rejects_missing_id_column() {
        let data = DataFrame::new(vec![Series::new("gym".into(), vec![1.0]).into()]).unwrap();
        let err = Dataset::new(data, &[square(1, 1.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::MissingColumn(name) if name == "district"));
    }

    #[test]
    fn accepts_string_ids() {
        let data = DataFrame::new(vec![
            Series::new("district".into(), vec!["01", "2"]).into(),
            Series::new("gym".into(), vec![1.0, 2.0]).into(),
        ]).unwrap();
        let dataset = Dataset::new(data, &[square(1, 1.0), square(2, 1.0)], LocationLabels::new(), &config()).unwrap();
        assert_eq!(dataset.ids(), &[DistrictId::new(1), DistrictId::new(2)]);
    }

    #[test]
    fn rejects_unparseable_id() {
        let data = DataFrame::new(vec![
            Series::new("district".into(), vec!["1", "north"]).into(),
            Series::new("gym".into(), vec![1.0, 2.0]).into(),
        ]).unwrap();
        let err = Dataset::new(data, &[square(1, 1.0)], LocationLabels::new(), &config()).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidDistrictId { row: 1, .. }));
    }

    #[test]
    fn missing_feature_column_is_reported() {
        let data = table(&[1], &[Some(1.0)]);
        let dataset = Dataset::new(data, &[square(1, 1.0)], LocationLabels::new(), &config()).unwrap();
        assert!(matches!(dataset.feature_column("park"), Err(ScoreError::MissingColumn(_))));
    }
}
