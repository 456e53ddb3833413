//! Feature vector assembly
//!
//! This module defines the canonical 30-field feature schema, the
//! ordered `FeatureVector` value, the assembler that derives the
//! mean/se/worst triples, and the end-to-end image extractor.

pub mod names;
pub mod vector;
pub mod assembler;
pub mod extractor;
#[cfg(test)]
mod tests;

pub use names::{BASE_FEATURES, FEATURE_COUNT, FEATURE_NAMES, Statistic, feature_index, feature_name};
pub use vector::FeatureVector;
pub use assembler::{assemble, RawDescriptors};
pub use extractor::FeatureExtractor;
