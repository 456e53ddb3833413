use std::sync::Arc;
use log::info;

use crate::classifier::{default_classifier, load_classifier, Classifier, Prediction};
use crate::config::ExtractionConfig;
use crate::errors::TumorResult;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::imaging::Scan;
use crate::utils::logger::Logger;

/// Outcome of one prediction request
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    /// Image path or feature file the request came from
    pub source: String,
    pub prediction: Prediction,
    /// Extracted features, present for image requests
    pub features: Option<FeatureVector>,
}

/// Main interface to the TumorKit library
///
/// Holds the extractor configuration and the classifier. Both are
/// read-only after construction, so one instance can serve concurrent
/// requests.
pub struct TumorKit {
    logger: Logger,
    extractor: FeatureExtractor,
    classifier: Arc<dyn Classifier>,
}

impl TumorKit {
    /// Create a new TumorKit instance with the bundled classifier
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file; without one nothing is written to disk
    ///
    /// # Returns
    /// A TumorKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> TumorResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::silent(),
        };

        Ok(TumorKit {
            logger,
            extractor: FeatureExtractor::default(),
            classifier: default_classifier()?,
        })
    }

    /// Replace the extraction configuration
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.extractor = FeatureExtractor::new(config);
        self
    }

    /// Replace the classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the classifier with one loaded from a TOML description
    pub fn with_model_file(self, path: &str) -> TumorResult<Self> {
        let classifier = load_classifier(path)?;
        Ok(self.with_classifier(classifier))
    }

    pub fn classifier(&self) -> &Arc<dyn Classifier> {
        &self.classifier
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Extract the feature vector of an image file
    pub fn extract_features(&self, image_path: &str) -> TumorResult<FeatureVector> {
        let features = self.extractor.extract_file(image_path)?;
        self.logger.log_features(image_path, &features)?;
        Ok(features)
    }

    /// Extract the feature vector of an already decoded scan
    pub fn extract_scan_features(&self, scan: &Scan) -> TumorResult<FeatureVector> {
        self.extractor.extract(scan)
    }

    /// Classify a feature vector
    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let prediction = self.classifier.classify(features);
        info!("Classifier '{}' predicted {}", self.classifier.name(), prediction.diagnosis);
        prediction
    }

    /// Extract features from an image and classify them
    pub fn predict_image(&self, image_path: &str) -> TumorResult<PredictionReport> {
        let features = self.extract_features(image_path)?;
        let prediction = self.predict(&features);
        self.logger.log(&format!("{}: {}", image_path, prediction.diagnosis))?;

        Ok(PredictionReport {
            source: image_path.to_string(),
            prediction,
            features: Some(features),
        })
    }

    /// Encoded-image variant of `predict_image`, for upload bodies
    pub fn predict_image_bytes(&self, source: &str, bytes: &[u8]) -> TumorResult<PredictionReport> {
        let features = self.extractor.extract_bytes(bytes)?;
        let prediction = self.predict(&features);

        Ok(PredictionReport {
            source: source.to_string(),
            prediction,
            features: Some(features),
        })
    }

    /// Read a TOML feature file and classify it
    pub fn predict_feature_file(&self, path: &str) -> TumorResult<PredictionReport> {
        let features = FeatureVector::from_file(path)?;
        let prediction = self.predict(&features);
        self.logger.log(&format!("{}: {}", path, prediction.diagnosis))?;

        Ok(PredictionReport {
            source: path.to_string(),
            prediction,
            features: None,
        })
    }
}
