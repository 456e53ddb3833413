//! Malignancy classifier collaborator
//!
//! The classifier is an opaque predict/predict_proba oracle over the
//! ordered 30-field vector. Linear and voting models are provided and
//! are described in TOML.

pub mod model;
pub mod logistic;
pub mod voting;
pub mod loader;

pub use model::{Classifier, Diagnosis, Prediction};
pub use logistic::LogisticModel;
pub use voting::{VotingModel, VotingStrategy};
pub use loader::{default_classifier, load_classifier, parse_classifier};
