//! Custom error types for feature extraction and prediction

use std::fmt;
use std::io;

/// Errors raised by the extraction pipeline and its collaborators
///
/// Only `InvalidImage` is expected to surface from a well-formed extraction
/// request; segmentation anomalies degrade to fallback values instead.
#[derive(Debug)]
pub enum TumorError {
    /// I/O error
    IoError(io::Error),
    /// Image cannot be decoded, is empty, or has degenerate dimensions
    InvalidImage(String),
    /// A required feature is missing from an input document
    MissingFeature(String),
    /// A feature value is not a finite number
    InvalidFeatureValue { name: String, value: String },
    /// A computed feature came out as NaN or infinite
    NonFiniteFeature(String),
    /// Classifier description could not be loaded
    ModelError(String),
    /// Extraction configuration could not be loaded
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for TumorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TumorError::IoError(e) => write!(f, "I/O error: {}", e),
            TumorError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            TumorError::MissingFeature(name) => write!(f, "Missing feature: {}", name),
            TumorError::InvalidFeatureValue { name, value } =>
                write!(f, "Invalid value for feature {}: {}", name, value),
            TumorError::NonFiniteFeature(name) => write!(f, "Non-finite value computed for feature {}", name),
            TumorError::ModelError(msg) => write!(f, "Model error: {}", msg),
            TumorError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TumorError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for TumorError {}

impl From<io::Error> for TumorError {
    fn from(error: io::Error) -> Self {
        TumorError::IoError(error)
    }
}

impl From<image::ImageError> for TumorError {
    fn from(error: image::ImageError) -> Self {
        TumorError::InvalidImage(error.to_string())
    }
}

impl From<String> for TumorError {
    fn from(msg: String) -> Self {
        TumorError::GenericError(msg)
    }
}

/// Result type for extraction and prediction operations
pub type TumorResult<T> = Result<T, TumorError>;
