//! Classifier trait definition

use std::fmt;

use crate::features::{FeatureVector, FEATURE_COUNT};

/// Predicted class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// Class 0
    Benign,
    /// Class 1
    Malignant,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::Benign => write!(f, "Benign"),
            Diagnosis::Malignant => write!(f, "Malignant"),
        }
    }
}

/// Class label plus the maximum class probability when available
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub diagnosis: Diagnosis,
    pub confidence: Option<f64>,
}

/// Strategy trait for malignancy classifiers
///
/// Implementations are immutable once built and are shared across
/// requests.
pub trait Classifier: Send + Sync {
    /// Short name of the model
    fn name(&self) -> &str;

    /// Predict the class of an ordered feature array
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Diagnosis;

    /// Class probabilities `[benign, malignant]`, if the model provides them
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Option<[f64; 2]>;

    /// Predict and attach the confidence of the prediction
    fn classify(&self, features: &FeatureVector) -> Prediction {
        let values = features.as_array();
        let diagnosis = self.predict(values);
        let confidence = self.predict_proba(values).map(|p| p[0].max(p[1]));
        Prediction { diagnosis, confidence }
    }
}
