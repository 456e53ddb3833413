//! Foreground segmentation
//!
//! This module turns a grayscale scan into a binary mask (Otsu
//! thresholding plus small-object removal), labels the connected
//! components of that mask and measures the dominant region.

pub mod threshold;
pub mod labeling;
pub mod region;
mod perimeter;

pub use threshold::{otsu_threshold, segment, threshold_mask};
pub use labeling::{label_components, remove_small_objects, LabelMap};
pub use region::{dominant_region, measure_regions, BoundingBox, RegionProps};
