//! Connected component labeling
//!
//! Thin wrapper over `imageproc::region_labelling`. Labels are consecutive,
//! start at 1 and follow the raster order of each component's first pixel.
//! Label 0 is background.

use image::Luma;
use imageproc::region_labelling::connected_components;
use log::debug;

use crate::config::Connectivity;
use crate::imaging::BinaryMask;

/// Per-pixel component labels of a mask
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: usize,
    height: usize,
    labels: Vec<usize>,
    count: usize,
}

impl LabelMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Label at (row, col), 0 for background
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.labels[row * self.width + col]
    }

    /// Number of components
    pub fn count(&self) -> usize {
        self.count
    }

    /// Pixel count of every component, indexed by `label - 1`
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            if label > 0 {
                sizes[label - 1] += 1;
            }
        }
        sizes
    }
}

/// Label the connected foreground components of a mask
///
/// # Arguments
/// * `mask` - Foreground mask
/// * `connectivity` - Adjacency rule
///
/// # Returns
/// The label map with consecutive labels
pub fn label_components(mask: &BinaryMask, connectivity: Connectivity) -> LabelMap {
    let gray = mask.to_gray_image();
    let components = connected_components(&gray, connectivity.into(), Luma([0u8]));

    let labels: Vec<usize> = components.pixels().map(|p| p[0] as usize).collect();
    let count = labels.iter().copied().max().unwrap_or(0);

    debug!("Labeled {} components ({:?}-connected)", count, connectivity);

    LabelMap {
        width: mask.width(),
        height: mask.height(),
        labels,
        count,
    }
}

/// Drop foreground components with fewer than `min_size` pixels
pub fn remove_small_objects(mask: &BinaryMask, min_size: usize, connectivity: Connectivity) -> BinaryMask {
    if min_size == 0 {
        return mask.clone();
    }

    let labels = label_components(mask, connectivity);
    let sizes = labels.sizes();
    let removed = sizes.iter().filter(|&&size| size < min_size).count();
    if removed > 0 {
        debug!("Removing {} of {} components smaller than {} pixels", removed, sizes.len(), min_size);
    }

    BinaryMask::from_fn(mask.width(), mask.height(), |row, col| {
        let label = labels.get(row, col);
        label > 0 && sizes[label - 1] >= min_size
    })
}
