use std::fs;

use livability::{
    score::{RankingStatus, ScoreStatus},
    Category, Dataset, FeatureSpec, ScoringConfig, Scorer, WeightVector,
};
use serde_json::Value;

/// Unit squares side by side; id 4 is a 2x2 square.
fn geojson(ids: &[u32]) -> String {
    let features: Vec<String> = ids.iter().enumerate().map(|(i, id)| {
        let x = (i * 3) as f64;
        let side = if *id == 4 { 2.0 } else { 1.0 };
        format!(
            r#"{{"type":"Feature","properties":{{"id":{id},"name":"D{id}"}},"geometry":{{"type":"Polygon","coordinates":[[[{x},0],[{x1},0],[{x1},{side}],[{x},{side}],[{x},0]]]}}}}"#,
            x1 = x + side,
        )
    }).collect();
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features.join(","))
}

fn two_feature_config() -> ScoringConfig {
    ScoringConfig::with_features(vec![
        FeatureSpec::new("a", "Feature A", Category::Amenities),
        FeatureSpec::new("b", "Feature B", Category::Amenities),
    ])
}

#[test]
fn single_weighted_feature_orders_districts() {
    let config = two_feature_config();
    let dataset = Dataset::from_strings(
        "district,a,b\n1,10,1\n2,20,2\n3,30,3\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    ).unwrap();

    let scorer = Scorer::new(&dataset, &config).unwrap();
    let weights = WeightVector::new(vec![1.0, 0.0]).unwrap();
    let report = scorer.score(&weights).unwrap();

    assert_eq!(report.table.status, ScoreStatus::Scored);
    let ranked: Vec<(u32, f64)> = report.ranking.entries.iter()
        .map(|entry| (entry.district.get(), entry.score))
        .collect();
    assert_eq!(ranked, vec![(3, 1.0), (2, 0.5), (1, 0.0)]);
    assert_eq!(report.ranking.status, RankingStatus::Ranked);

    // no label file: labels fall back to the district id
    assert_eq!(report.ranking.entries[0].label, "3");
}

#[test]
fn inverse_feature_reverses_order() {
    let config = ScoringConfig::with_features(vec![
        FeatureSpec::inverse("price", "Price", Category::Property),
    ]);
    let dataset = Dataset::from_strings(
        "district,price\n1,300\n2,200\n3,100\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    ).unwrap();

    let report = livability::score::score(&dataset, &config, &WeightVector::new(vec![1.0]).unwrap()).unwrap();
    let order: Vec<u32> = report.ranking.entries.iter().map(|e| e.district.get()).collect();
    assert_eq!(order, vec![3, 2, 1]);
}

#[test]
fn zero_weights_tie_everything_at_zero() {
    let config = two_feature_config();
    let dataset = Dataset::from_strings(
        "district,a,b\n3,30,3\n1,10,1\n2,20,2\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    ).unwrap();

    let scorer = Scorer::new(&dataset, &config).unwrap();
    let report = scorer.score(&scorer.reset_weights().unwrap()).unwrap();

    assert_eq!(report.table.status, ScoreStatus::NoPreferences);
    assert_eq!(report.ranking.status, RankingStatus::NoPreferences);
    let order: Vec<u32> = report.ranking.entries.iter().map(|e| e.district.get()).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert!(report.ranking.entries.iter().all(|e| e.score == 0.0));
}

#[test]
fn count_features_are_compared_per_area() {
    // Same gym count, but district 4 is four times the area of district 1.
    let config = ScoringConfig::with_features(vec![
        FeatureSpec::count("gym", "Gyms", Category::Amenities),
    ]);
    let dataset = Dataset::from_strings(
        "district,gym\n1,4\n4,4\n",
        &geojson(&[1, 4]),
        None,
        &config,
    ).unwrap();
    assert_eq!(dataset.areas(), &[1.0, 4.0]);

    let scorer = Scorer::new(&dataset, &config).unwrap();
    let report = scorer.score(&WeightVector::new(vec![1.0]).unwrap()).unwrap();

    let scores: Vec<(u32, f64)> = report.ranking.entries.iter()
        .map(|e| (e.district.get(), e.score))
        .collect();
    assert_eq!(scores, vec![(1, 1.0), (4, 0.0)]);
}

#[test]
fn missing_values_exclude_only_weighted_districts() {
    let config = two_feature_config();
    let dataset = Dataset::from_strings(
        "district,a,b\n1,10,1\n2,20,\n3,30,3\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    ).unwrap();
    let scorer = Scorer::new(&dataset, &config).unwrap();

    // b is unweighted, so district 2 still scores
    let report = scorer.score(&WeightVector::new(vec![1.0, 0.0]).unwrap()).unwrap();
    assert_eq!(report.ranking.entries.len(), 3);
    assert!(!report.ranking.is_incomplete());

    let report = scorer.score(&WeightVector::new(vec![1.0, 1.0]).unwrap()).unwrap();
    assert_eq!(report.ranking.excluded.iter().map(|id| id.get()).collect::<Vec<_>>(), vec![2]);
    let order: Vec<u32> = report.ranking.entries.iter().map(|e| e.district.get()).collect();
    assert_eq!(order, vec![3, 1]);
    assert_eq!(report.table.incomplete().len(), 1);
}

#[test]
fn labels_are_joined_into_ranking() {
    let config = two_feature_config();
    let dataset = Dataset::from_strings(
        "district,a,b\n1,10,1\n2,20,2\n3,30,3\n",
        &geojson(&[1, 2, 3]),
        Some("district,location\n3,Bishan\n3,Toa Payoh\n1,Raffles Place\n"),
        &config,
    ).unwrap();

    let scorer = Scorer::new(&dataset, &config).unwrap();
    let report = scorer.score_top(&WeightVector::new(vec![0.5, 0.5]).unwrap(), 2).unwrap();

    assert_eq!(report.ranking.entries.len(), 2);
    assert_eq!(report.ranking.entries[0].label, "Bishan, Toa Payoh");
    assert_eq!(report.ranking.entries[0].to_string(), "1. District 3 (Bishan, Toa Payoh): 1.000");
    assert_eq!(report.ranking.entries[1].label, "2");
}

#[test]
fn unmatched_district_fails_to_load() {
    let config = two_feature_config();
    let result = Dataset::from_strings(
        "district,a,b\n1,10,1\n2,20,2\n5,30,3\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    );
    assert!(result.is_err());
}

#[test]
fn scoring_is_deterministic() {
    let config = two_feature_config();
    let dataset = Dataset::from_strings(
        "district,a,b\n1,10,3\n2,20,2\n3,30,1\n",
        &geojson(&[1, 2, 3]),
        None,
        &config,
    ).unwrap();
    let scorer = Scorer::new(&dataset, &config).unwrap();
    let weights = WeightVector::new(vec![0.5, 0.5]).unwrap();

    let first = scorer.score(&weights).unwrap();
    let second = scorer.score(&weights).unwrap();
    assert_eq!(first, second);

    // every district ties at 0.5; ids break the tie
    let order: Vec<u32> = first.ranking.entries.iter().map(|e| e.district.get()).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn writes_score_table_and_annotated_geojson() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("districts.csv");
    let geometry_path = dir.path().join("districts.geojson");
    fs::write(&table_path, "district,a,b\n1,10,1\n2,20,2\n3,30,3\n").unwrap();
    fs::write(&geometry_path, geojson(&[1, 2, 3])).unwrap();

    let config = two_feature_config();
    let dataset = Dataset::read_from_files(&table_path, &geometry_path, None, &config).unwrap();
    let scorer = Scorer::new(&dataset, &config).unwrap();
    let report = scorer.score_top(&WeightVector::new(vec![1.0, 0.0]).unwrap(), 1).unwrap();

    let csv_path = dir.path().join("scores.csv");
    report.table.write_to_csv(&csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().next().unwrap(), "district,a,b,total_score");
    assert_eq!(csv.lines().count(), 4);

    let out_path = dir.path().join("scored.geojson");
    report.write_geojson(&geometry_path, &out_path, &config.id_property).unwrap();
    let value: Value = serde_json::from_slice(&fs::read(&out_path).unwrap()).unwrap();
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);

    let properties = &features[2]["properties"];
    assert_eq!(properties["id"], 3);
    assert_eq!(properties["total_score"], 1.0);
    assert_eq!(properties["rank"], 1);
    assert!(features[0]["properties"]["rank"].is_null());
}
