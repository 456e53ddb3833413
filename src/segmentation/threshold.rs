//! Global thresholding
//!
//! Otsu's method (via `imageproc`) picks the intensity that maximises the
//! between-class variance of the 256-bin histogram. Pixels strictly above
//! the selected level become foreground.

use imageproc::contrast::otsu_level;
use log::{debug, warn};

use crate::config::ExtractionConfig;
use crate::imaging::{BinaryMask, Scan};
use super::labeling::remove_small_objects;

/// Compute the Otsu threshold of a scan
///
/// The returned level `t` splits the histogram into `{<= t}` and `{> t}`;
/// among equally good levels the lowest one wins.
///
/// # Returns
/// The threshold, or `None` when the scan holds a single intensity and
/// no split exists
pub fn otsu_threshold(scan: &Scan) -> Option<u8> {
    if scan.is_uniform() {
        return None;
    }

    Some(otsu_level(&scan.to_gray_image()))
}

/// Mark every pixel strictly brighter than `threshold` as foreground
pub fn threshold_mask(scan: &Scan, threshold: u8) -> BinaryMask {
    BinaryMask::from_fn(scan.width(), scan.height(), |row, col| scan.get(row, col) > threshold)
}

/// Produce the noise-filtered foreground mask of a scan
///
/// Uses the Otsu threshold, or `config.fallback_threshold` for uniform
/// scans, then drops components smaller than `config.min_object_size`.
pub fn segment(scan: &Scan, config: &ExtractionConfig) -> BinaryMask {
    let threshold = match otsu_threshold(scan) {
        Some(t) => {
            debug!("Otsu threshold: {}", t);
            t
        }
        None => {
            warn!("Uniform image, using fallback threshold {}", config.fallback_threshold);
            config.fallback_threshold
        }
    };

    let mask = threshold_mask(scan, threshold);
    remove_small_objects(&mask, config.min_object_size, config.noise_connectivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_threshold_separates_modes() {
        let scan = Scan::from_fn(10, 10, |_, col| if col < 5 { 20 } else { 220 }).unwrap();
        let threshold = otsu_threshold(&scan).unwrap();
        assert!(threshold >= 20 && threshold < 220);

        let mask = threshold_mask(&scan, threshold);
        assert_eq!(mask.count(), 50);
        assert!(mask.get(0, 9));
        assert!(!mask.get(0, 0));
    }

    #[test]
    fn test_two_level_threshold_is_lower_level() {
        let scan = Scan::from_fn(4, 4, |row, _| if row < 2 { 0 } else { 200 }).unwrap();
        assert_eq!(otsu_threshold(&scan), Some(0));
    }

    #[test]
    fn test_equal_splits_pick_lowest_level() {
        // Every level in 10..=249 separates the two modes equally well
        let scan = Scan::from_fn(8, 8, |row, _| if row < 4 { 10 } else { 250 }).unwrap();
        assert_eq!(otsu_threshold(&scan), Some(10));

        let mask = threshold_mask(&scan, 10);
        assert_eq!(mask.count(), 32);
    }

    #[test]
    fn test_uniform_scan_uses_fallback() {
        let config = ExtractionConfig {
            min_object_size: 0,
            ..ExtractionConfig::default()
        };

        let bright = Scan::new(8, 8, vec![200; 64]).unwrap();
        assert_eq!(otsu_threshold(&bright), None);
        assert_eq!(segment(&bright, &config).count(), 64);

        let dark = Scan::new(8, 8, vec![100; 64]).unwrap();
        assert!(segment(&dark, &config).is_empty());
    }

    #[test]
    fn test_small_objects_are_removed() {
        // 3x3 speck plus a 10x10 block
        let scan = Scan::from_fn(32, 32, |row, col| {
            if (2..5).contains(&row) && (2..5).contains(&col) {
                255
            } else if (15..25).contains(&row) && (15..25).contains(&col) {
                255
            } else {
                0
            }
        }).unwrap();

        let mask = segment(&scan, &ExtractionConfig::default());
        assert_eq!(mask.count(), 100);
        assert!(!mask.get(3, 3));
    }
}
