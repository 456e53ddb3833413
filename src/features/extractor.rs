//! Image-to-feature pipeline
//!
//! Runs segmentation, region selection, the three descriptor families
//! and the assembler over one scan. Every call works on its own buffers;
//! an extractor can be shared between threads.

use log::{debug, info, warn};

use crate::config::ExtractionConfig;
use crate::descriptors::{fractal_dimension, ShapeDescriptor, TextureDescriptor};
use crate::errors::TumorResult;
use crate::imaging::{load_scan, scan_from_bytes, Scan};
use crate::segmentation::{dominant_region, label_components, measure_regions, segment};
use super::assembler::{assemble, RawDescriptors};
use super::vector::FeatureVector;

/// Extracts feature vectors from scans
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractionConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractionConfig) -> Self {
        FeatureExtractor { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Compute the feature vector of a scan
    ///
    /// Returns the all-zero vector when segmentation finds no region.
    pub fn extract(&self, scan: &Scan) -> TumorResult<FeatureVector> {
        debug!("Extracting features from {}x{} scan", scan.width(), scan.height());

        let mask = segment(scan, &self.config);
        let labels = label_components(&mask, self.config.label_connectivity);
        let regions = measure_regions(&labels, scan);

        let region = match dominant_region(&regions) {
            Some(region) => region,
            None => {
                warn!("No foreground region found, returning fallback features");
                return Ok(FeatureVector::zeros());
            }
        };

        let shape = ShapeDescriptor::from_region(region);
        let texture = TextureDescriptor::compute(scan, region, &self.config);
        let fractal = fractal_dimension(&mask);
        debug!("Shape: {:?}", shape);
        debug!("Texture: {:?}, fractal dimension: {:.4}", texture, fractal);

        let raw = RawDescriptors::from_parts(&shape, &texture, fractal);
        assemble(&raw, region.area)
    }

    /// Load an image file and compute its feature vector
    pub fn extract_file(&self, path: &str) -> TumorResult<FeatureVector> {
        let scan = load_scan(path)?;
        let features = self.extract(&scan)?;
        info!("Extracted features from {}", path);
        Ok(features)
    }

    /// Decode an encoded image buffer and compute its feature vector
    pub fn extract_bytes(&self, bytes: &[u8]) -> TumorResult<FeatureVector> {
        let scan = scan_from_bytes(bytes)?;
        self.extract(&scan)
    }
}
