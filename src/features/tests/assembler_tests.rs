//! Tests for the feature assembler

extern crate std;

use crate::errors::TumorError;
use crate::features::{assemble, FeatureVector, RawDescriptors, Statistic, FEATURE_NAMES};

fn sample_raw() -> RawDescriptors {
    RawDescriptors {
        radius: 10.0,
        texture: 3.5,
        perimeter: 70.0,
        area: 314.0,
        smoothness: 180.0,
        compactness: 1.2,
        concavity: 0.3,
        concave_points: 0.8,
        symmetry: 1.1,
        fractal_dimension: 1.6,
    }
}

#[test]
fn test_mean_se_worst_triples() {
    let raw = sample_raw();
    let features = assemble(&raw, 314).unwrap();
    let root_area = (314f64).sqrt();

    for (i, value) in raw.as_array().iter().enumerate() {
        std::assert_eq!(features.value(i, Statistic::Mean), *value);
        std::assert_eq!(features.value(i, Statistic::StandardError), *value / root_area);
        std::assert_eq!(features.value(i, Statistic::Worst), *value);
    }

    std::assert_eq!(features.get("radius_mean"), Some(10.0));
    std::assert_eq!(features.get("fractal_dimension_worst"), Some(1.6));
    std::assert_eq!(features.iter().count(), FEATURE_NAMES.len());
}

#[test]
fn test_zero_area_zeroes_se() {
    let features = assemble(&sample_raw(), 0).unwrap();
    for i in 0..10 {
        std::assert_eq!(features.value(i, Statistic::StandardError), 0.0);
    }
}

#[test]
fn test_non_finite_descriptor_is_rejected() {
    let mut raw = sample_raw();
    raw.symmetry = f64::NAN;
    match assemble(&raw, 10) {
        Err(TumorError::NonFiniteFeature(name)) => std::assert_eq!(name, "symmetry_mean"),
        other => std::panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_feature_toml_parsing() {
    let mut document = String::new();
    for (i, name) in FEATURE_NAMES.iter().enumerate() {
        if i % 2 == 0 {
            document.push_str(&std::format!("{} = {}\n", name, i));
        } else {
            document.push_str(&std::format!("{} = {}.5\n", name, i));
        }
    }
    document.push_str("patient_id = \"A-17\"\n");

    let features = FeatureVector::from_toml_str(&document).unwrap();
    std::assert_eq!(features.as_array()[0], 0.0);
    std::assert_eq!(features.as_array()[1], 1.5);
    std::assert_eq!(features.get("fractal_dimension_worst"), Some(29.5));
}

#[test]
fn test_feature_toml_errors() {
    match FeatureVector::from_toml_str("radius_mean = 1.0\n") {
        Err(TumorError::MissingFeature(name)) => std::assert_eq!(name, "texture_mean"),
        other => std::panic!("unexpected result: {:?}", other),
    }

    let mut document = String::new();
    for name in FEATURE_NAMES.iter() {
        if name == "area_se" {
            document.push_str("area_se = \"large\"\n");
        } else {
            document.push_str(&std::format!("{} = 1.0\n", name));
        }
    }
    std::assert!(std::matches!(
        FeatureVector::from_toml_str(&document),
        Err(TumorError::InvalidFeatureValue { .. })
    ));

    let with_nan = document.replace("area_se = \"large\"", "area_se = nan");
    std::assert!(std::matches!(
        FeatureVector::from_toml_str(&with_nan),
        Err(TumorError::InvalidFeatureValue { .. })
    ));
}
