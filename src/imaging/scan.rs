//! Grayscale scan structure
//!
//! A `Scan` is a row-major grid of 8-bit intensity samples. The
//! coordinate system follows the usual image convention where (0,0) is
//! the top-left corner, rows grow downwards and columns to the right.

use image::{GrayImage, Luma};

use crate::errors::{TumorError, TumorResult};

/// Immutable single-channel intensity image
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Scan {
    /// Create a scan from row-major samples
    ///
    /// # Arguments
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    /// * `pixels` - Row-major samples, `width * height` long
    ///
    /// # Returns
    /// The scan, or `InvalidImage` for empty or inconsistent dimensions
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> TumorResult<Self> {
        if width == 0 || height == 0 {
            return Err(TumorError::InvalidImage(format!(
                "degenerate dimensions {}x{}", width, height)));
        }
        if pixels.len() != width * height {
            return Err(TumorError::InvalidImage(format!(
                "expected {} samples for {}x{}, got {}", width * height, width, height, pixels.len())));
        }

        Ok(Scan { width, height, pixels })
    }

    /// Build a scan by evaluating `f(row, col)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> TumorResult<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Scan::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at (row, col); callers stay within bounds
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }

    /// Row-major sample buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when every sample has the same intensity
    pub fn is_uniform(&self) -> bool {
        self.pixels.iter().all(|&p| p == self.pixels[0])
    }

    /// Copy into an `image` buffer (x = col, y = row)
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([self.get(y as usize, x as usize)])
        })
    }
}
