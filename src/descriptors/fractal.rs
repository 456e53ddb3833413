//! Box-counting fractal dimension
//!
//! The mask is covered with square boxes of side 2, 4, ... (all smaller
//! than the shorter image side); partial boxes at the right and bottom
//! edges are counted. The dimension is minus the slope of the
//! least-squares line through (ln size, ln occupied boxes).

use log::debug;

use crate::imaging::BinaryMask;

/// Box sizes and the number of occupied boxes at each size
pub fn box_counts(mask: &BinaryMask) -> Vec<(usize, usize)> {
    let min_dim = mask.width().min(mask.height());
    if min_dim == 0 {
        return Vec::new();
    }

    let k = min_dim.ilog2();
    (1..k)
        .map(|exp| {
            let size = 1usize << exp;
            (size, occupied_boxes(mask, size))
        })
        .collect()
}

fn occupied_boxes(mask: &BinaryMask, size: usize) -> usize {
    let box_cols = mask.width().div_ceil(size);
    let box_rows = mask.height().div_ceil(size);
    let mut occupied = vec![false; box_rows * box_cols];

    for row in 0..mask.height() {
        for col in 0..mask.width() {
            if mask.get(row, col) {
                occupied[(row / size) * box_cols + col / size] = true;
            }
        }
    }

    occupied.iter().filter(|&&o| o).count()
}

/// Slope of the least-squares line through the points
fn fit_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        sxy += (x - mean_x) * (y - mean_y);
        sxx += (x - mean_x) * (x - mean_x);
    }

    sxy / sxx
}

/// Estimate the fractal dimension of a mask
///
/// # Returns
/// The estimate, or 0.0 when fewer than two box sizes have occupied
/// boxes (including every mask smaller than 8 pixels on a side)
pub fn fractal_dimension(mask: &BinaryMask) -> f64 {
    let samples: Vec<(f64, f64)> = box_counts(mask)
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(size, count)| ((size as f64).ln(), (count as f64).ln()))
        .collect();

    if samples.len() < 2 {
        debug!("Too few box-count samples ({}), fractal dimension set to 0", samples.len());
        return 0.0;
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();
    let dimension = -fit_slope(&xs, &ys);
    if dimension.is_finite() { dimension } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sierpinski(side: usize, scale: usize) -> BinaryMask {
        BinaryMask::from_fn(side * scale, side * scale, |row, col| (row / scale) & (col / scale) == 0)
    }

    #[test]
    fn test_box_sizes_stay_below_min_dimension() {
        let mask = BinaryMask::from_fn(40, 17, |_, _| true);
        let sizes: Vec<usize> = box_counts(&mask).iter().map(|&(s, _)| s).collect();
        assert_eq!(sizes, vec![2, 4, 8]);
    }

    #[test]
    fn test_partial_edge_boxes_are_counted() {
        let mask = BinaryMask::from_fn(9, 9, |row, col| row == 8 && col == 8);
        assert_eq!(box_counts(&mask), vec![(2, 1), (4, 1)]);
    }

    #[test]
    fn test_filled_square_is_two_dimensional() {
        let mask = BinaryMask::from_fn(64, 64, |_, _| true);
        assert!((fractal_dimension(&mask) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sierpinski_dimension_and_resampling() {
        let expected = 3f64.ln() / 2f64.ln();
        let base = fractal_dimension(&sierpinski(64, 1));
        let doubled = fractal_dimension(&sierpinski(64, 2));
        assert!((base - expected).abs() < 1e-9);
        assert!((doubled - base).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_masks_return_zero() {
        for side in [1usize, 2, 3, 4, 7] {
            let mask = BinaryMask::from_fn(side, side, |_, _| true);
            assert_eq!(fractal_dimension(&mask), 0.0, "side {}", side);
        }
        assert_eq!(fractal_dimension(&BinaryMask::new(32, 32)), 0.0);
    }
}
