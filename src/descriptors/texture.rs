//! Texture descriptors
//!
//! Contrast of the gray-level co-occurrence matrix of the whole scan at
//! angle 0, and the mean intensity of the dominant region.

use log::debug;

use crate::config::ExtractionConfig;
use crate::imaging::Scan;
use crate::segmentation::RegionProps;

/// Symmetric, normalised gray-level co-occurrence matrix
#[derive(Debug, Clone)]
pub struct CoOccurrenceMatrix {
    levels: usize,
    probabilities: Vec<f64>,
}

impl CoOccurrenceMatrix {
    /// Build the matrix from horizontal pixel pairs `distance` apart
    ///
    /// # Arguments
    /// * `scan` - Source scan
    /// * `distance` - Column offset of the pair
    /// * `levels` - Gray levels (1..=256); samples are rescaled to this range
    ///
    /// # Returns
    /// The matrix; all zeros if the scan has no pair at this offset
    pub fn horizontal(scan: &Scan, distance: usize, levels: usize) -> Self {
        let levels = levels.clamp(1, 256);
        let quantize = |value: u8| value as usize * levels / 256;

        let mut counts = vec![0u64; levels * levels];
        let mut pairs = 0u64;
        for row in 0..scan.height() {
            for col in 0..scan.width().saturating_sub(distance) {
                let i = quantize(scan.get(row, col));
                let j = quantize(scan.get(row, col + distance));
                counts[i * levels + j] += 1;
                counts[j * levels + i] += 1;
                pairs += 2;
            }
        }

        let probabilities = if pairs == 0 {
            vec![0.0; levels * levels]
        } else {
            counts.iter().map(|&c| c as f64 / pairs as f64).collect()
        };

        CoOccurrenceMatrix { levels, probabilities }
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Probability of the (i, j) level pair
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.probabilities[i * self.levels + j]
    }

    /// Sum of P(i, j) * (i - j)^2
    pub fn contrast(&self) -> f64 {
        let mut contrast = 0.0;
        for i in 0..self.levels {
            for j in 0..self.levels {
                let p = self.get(i, j);
                if p > 0.0 {
                    let diff = i as f64 - j as f64;
                    contrast += p * diff * diff;
                }
            }
        }
        contrast
    }
}

/// Textural measurements of a scan and its dominant region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureDescriptor {
    /// Co-occurrence contrast of the whole scan
    pub texture: f64,
    /// Region mean intensity
    pub smoothness: f64,
}

impl TextureDescriptor {
    pub fn compute(scan: &Scan, region: &RegionProps, config: &ExtractionConfig) -> Self {
        let matrix = CoOccurrenceMatrix::horizontal(scan, config.glcm_distance, config.glcm_levels);
        let texture = matrix.contrast();
        debug!("GLCM contrast: {:.4}", texture);

        TextureDescriptor {
            texture,
            smoothness: region.mean_intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripes_contrast() {
        // alternating 0/10 columns: every horizontal pair differs by 10
        let scan = Scan::from_fn(6, 3, |_, col| if col % 2 == 0 { 0 } else { 10 }).unwrap();
        let matrix = CoOccurrenceMatrix::horizontal(&scan, 1, 256);
        assert!((matrix.contrast() - 100.0).abs() < 1e-9);
        assert!((matrix.get(0, 10) - 0.5).abs() < 1e-12);
        assert_eq!(matrix.get(0, 10), matrix.get(10, 0));
    }

    #[test]
    fn test_uniform_scan_has_zero_contrast() {
        let scan = Scan::new(5, 5, vec![42; 25]).unwrap();
        let matrix = CoOccurrenceMatrix::horizontal(&scan, 1, 256);
        assert_eq!(matrix.contrast(), 0.0);
        assert_eq!(matrix.get(42, 42), 1.0);
    }

    #[test]
    fn test_single_column_has_no_pairs() {
        let scan = Scan::from_fn(1, 4, |row, _| row as u8 * 50).unwrap();
        assert_eq!(CoOccurrenceMatrix::horizontal(&scan, 1, 256).contrast(), 0.0);
    }

    #[test]
    fn test_quantized_levels() {
        let scan = Scan::from_fn(2, 1, |_, col| if col == 0 { 0 } else { 255 }).unwrap();
        let matrix = CoOccurrenceMatrix::horizontal(&scan, 1, 8);
        assert_eq!(matrix.levels(), 8);
        assert!((matrix.contrast() - 49.0).abs() < 1e-12);
    }
}
