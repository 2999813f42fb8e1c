#![allow(non_snake_case)]

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use essi::types::*;
use essi::*;

/// Approximate equality for f32 values
fn approx(value: f32, expected: f32) -> bool {
    (value - expected).abs() < 1e-6
}

fn dataset_from_file(path: &str) -> Dataset {
    let path = Path::new(path);
    let mut f = File::open(path).unwrap();
    let mut datasetstring = String::new();
    f.read_to_string(&mut datasetstring).unwrap();
    datasetstring.parse::<Dataset>().unwrap()
}

#[test]
fn pipeline_from_test_data_file() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let data = EssiData::from_dataset(&dataset).unwrap();
    assert_eq!(4, data.num_steps());
    assert_eq!(2, data.num_carriers());
    assert_eq!(1.0, data.dt);

    let weights = dataset.get_meta_weights("ESSI_PESOS").unwrap();
    let index = security_index(&data, &weights).unwrap();

    // Production covers the demand exactly and imports cover half of it
    assert!(approx(index.grades.spg, 1.0));
    assert!(approx(index.grades.sag, 0.5));
    assert!(approx(index.grades.aug, 0.75));
    assert!(approx(index.grades.ssg, 1.0));
    assert!(approx(index.grades.aut, 0.9));
    assert!(approx(index.essi, 0.82));
}

#[test]
fn individual_grade_accessors_match_composite() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let data = EssiData::from_dataset(&dataset).unwrap();
    let index = security_index(&data, &WEIGHTS_DEFAULT).unwrap();

    assert_eq!(index.grades.spg, spg(&data).unwrap());
    assert_eq!(index.grades.sag, sag(&data).unwrap());
    assert_eq!(index.grades.aug, aug(&data).unwrap());
    assert_eq!(index.grades.ssg, ssg(&data).unwrap());
    assert_eq!(index.grades.aut, aut(&data).unwrap());
}

#[test]
fn essi_is_invariant_under_weight_rescaling() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let data = EssiData::from_dataset(&dataset).unwrap();

    let weights = Weights([0.1, 0.2, 0.3, 0.35, 0.05]);
    let scaled = Weights([0.4, 0.8, 1.2, 1.4, 0.2]);
    let reference = security_index(&data, &weights).unwrap().essi;
    let rescaled = security_index(&data, &scaled).unwrap().essi;
    assert!(approx(reference, rescaled));
}

#[test]
fn dataset_roundtrip_through_display() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let reparsed = dataset.to_string().parse::<Dataset>().unwrap();
    assert_eq!(dataset, reparsed);

    // both parses produce the same results
    let weights = WEIGHTS_DEFAULT;
    let first = security_index(&EssiData::from_dataset(&dataset).unwrap(), &weights).unwrap();
    let second = security_index(&EssiData::from_dataset(&reparsed).unwrap(), &weights).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shape_mismatch_fails_before_computing() {
    let mut dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    // drop the second demand carrier
    dataset
        .series
        .retain(|s| !(s.flow == Flow::DEMANDA && s.carrier == 1));
    match EssiData::from_dataset(&dataset) {
        Err(error::EssiError::ShapeMismatch { dataset, .. }) => assert_eq!("DEMANDA", dataset),
        other => panic!("se esperaba ShapeMismatch y se obtuvo {:?}", other),
    }
}

#[test]
fn zero_weights_are_rejected() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let data = EssiData::from_dataset(&dataset).unwrap();
    assert_eq!(
        Err(error::EssiError::ZeroWeightSum),
        security_index(&data, &Weights([0.0; 5])).map(|index| index.essi)
    );
}

#[test]
fn results_serialize_to_json() {
    let dataset = dataset_from_file("test_data/essi_test_dataset.csv");
    let data = EssiData::from_dataset(&dataset).unwrap();
    let index = security_index(&data, &WEIGHTS_DEFAULT).unwrap();

    let json = serde_json::to_string_pretty(&index).unwrap();
    assert!(json.contains("\"essi\""));
    assert!(json.contains("\"spg\""));
    assert!(json.contains("\"weights\""));
}
