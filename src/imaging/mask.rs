//! Binary foreground mask

use image::{GrayImage, Luma};

/// Boolean grid with the dimensions of the scan it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask
    pub fn new(width: usize, height: usize) -> Self {
        BinaryMask {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a mask by evaluating `f(row, col)` for every cell
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        BinaryMask { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// Number of foreground cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Render as 255 (foreground) / 0 (background) luma image
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            if self.get(y as usize, x as usize) { Luma([255]) } else { Luma([0]) }
        })
    }
}
