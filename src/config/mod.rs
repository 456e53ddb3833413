//! Pipeline configuration
//!
//! This module holds the tunable constants of the extraction pipeline
//! and the TOML loader used to override them.

pub mod extraction;

pub use extraction::{Connectivity, ExtractionConfig};
