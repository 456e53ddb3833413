pub mod errors;
pub mod config;
pub mod imaging;
pub mod segmentation;
pub mod descriptors;
pub mod features;
pub mod classifier;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{PredictionReport, TumorKit};

pub use errors::{TumorError, TumorResult};
pub use imaging::Scan;
pub use features::{FeatureExtractor, FeatureVector};
pub use classifier::{Classifier, Diagnosis, Prediction};
