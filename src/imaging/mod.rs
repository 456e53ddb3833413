//! Grayscale image and mask value types
//!
//! This module provides the immutable intensity grid consumed by the
//! pipeline, the boolean mask produced from it, and decoding helpers
//! built on the `image` crate.

pub mod scan;
pub mod mask;
pub mod loader;

pub use scan::Scan;
pub use mask::BinaryMask;
pub use loader::{load_scan, scan_from_bytes, scan_from_dynamic};
