//! Integration tests for image-to-prediction workflows

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use image::{DynamicImage, GrayImage, Luma};
use tumorkit::classifier::{parse_classifier, Diagnosis};
use tumorkit::features::FEATURE_NAMES;
use tumorkit::{FeatureVector, Scan, TumorError, TumorKit};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(std::format!("tumorkit_{}_{}", std::process::id(), name))
}

/// Writes a PNG with a bright disk of `radius` on a black background
fn write_disk_png(name: &str, size: u32, radius: f64) -> PathBuf {
    let center = (size / 2) as f64;
    let image = GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        if dx * dx + dy * dy <= radius * radius { Luma([210]) } else { Luma([15]) }
    });

    let path = temp_path(name);
    DynamicImage::ImageLuma8(image).save(&path).unwrap();
    path
}

#[test]
fn test_image_prediction_includes_features() {
    init_logging();
    let path = write_disk_png("disk.png", 96, 25.0);
    let kit = TumorKit::new(None).unwrap();

    let report = kit.predict_image(path.to_str().unwrap()).unwrap();
    let features = report.features.as_ref().unwrap();
    let radius = features.get("radius_mean").unwrap();
    std::assert!((radius - 25.0).abs() < 0.5, "radius {}", radius);
    std::assert_eq!(features.get("smoothness_mean"), Some(210.0));

    if let Some(confidence) = report.prediction.confidence {
        std::assert!((0.5..=1.0).contains(&confidence));
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn test_zero_vector_is_classifiable() {
    init_logging();
    let kit = TumorKit::new(None).unwrap();
    let black = Scan::new(32, 32, std::vec![0; 1024]).unwrap();

    let features = kit.extract_scan_features(&black).unwrap();
    std::assert!(features.is_all_zero());

    let prediction = kit.predict(&features);
    std::assert!(std::matches!(prediction.diagnosis, Diagnosis::Benign | Diagnosis::Malignant));
}

#[test]
fn test_feature_file_prediction_with_custom_model() {
    init_logging();
    let model = parse_classifier(
        "kind = \"logistic\"\nintercept = -5.0\n[coefficients]\narea_mean = 0.01\n",
    ).unwrap();
    let kit = TumorKit::new(None).unwrap().with_classifier(model);

    let mut document = String::new();
    for name in FEATURE_NAMES.iter() {
        let value = if name.as_str() == "area_mean" { 1000.0 } else { 0.0 };
        document.push_str(&std::format!("{} = {:?}\n", name, value));
    }
    let path = temp_path("features.toml");
    fs::write(&path, document).unwrap();

    let report = kit.predict_feature_file(path.to_str().unwrap()).unwrap();
    std::assert_eq!(report.prediction.diagnosis, Diagnosis::Malignant);
    std::assert!(report.features.is_none());
    let confidence = report.prediction.confidence.unwrap();
    std::assert!((confidence - 1.0 / (1.0 + (-5.0f64).exp())).abs() < 1e-12);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_invalid_image_is_reported() {
    init_logging();
    let path = temp_path("broken.png");
    fs::write(&path, b"definitely not a png").unwrap();
    let kit = TumorKit::new(None).unwrap();

    let result = kit.predict_image(path.to_str().unwrap());
    std::assert!(std::matches!(result, Err(TumorError::InvalidImage(_))));
    std::assert!(std::matches!(kit.predict_image_bytes("upload", &[]), Err(TumorError::InvalidImage(_))));
    let _ = fs::remove_file(&path);
}

#[test]
fn test_concurrent_requests_share_one_kit() {
    init_logging();
    let kit = Arc::new(TumorKit::new(None).unwrap());
    let scans: Vec<Scan> = (0..4)
        .map(|i| {
            let radius = 10.0 + 4.0 * i as f64;
            Scan::from_fn(64, 64, |row, col| {
                let dr = row as f64 - 32.0;
                let dc = col as f64 - 32.0;
                if dr * dr + dc * dc <= radius * radius { 180 } else { 0 }
            }).unwrap()
        })
        .collect();

    let sequential: Vec<FeatureVector> = scans.iter()
        .map(|scan| kit.extract_scan_features(scan).unwrap())
        .collect();

    let concurrent: Vec<FeatureVector> = std::thread::scope(|s| {
        let handles: Vec<_> = scans.iter()
            .map(|scan| {
                let kit = Arc::clone(&kit);
                s.spawn(move || kit.extract_scan_features(scan).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    std::assert_eq!(sequential, concurrent);
}
