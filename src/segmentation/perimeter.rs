//! Region perimeter estimation
//!
//! Border pixels (region pixels lost by an erosion with the 4-neighbour
//! cross) are coded by their neighbourhood and weighted so straight runs
//! count 1 per pixel and diagonal steps count sqrt(2).

use std::f64::consts::SQRT_2;

use super::labeling::LabelMap;
use super::region::BoundingBox;

const CODE_KERNEL: [[u32; 3]; 3] = [
    [10, 2, 10],
    [2, 1, 2],
    [10, 2, 10],
];

fn code_weight(code: u32) -> f64 {
    match code {
        5 | 7 | 15 | 17 | 25 | 27 => 1.0,
        21 | 33 => SQRT_2,
        13 | 23 => (1.0 + SQRT_2) / 2.0,
        _ => 0.0,
    }
}

/// Perimeter of the component `label` inside `bbox`
pub(crate) fn region_perimeter(labels: &LabelMap, label: usize, bbox: &BoundingBox) -> f64 {
    let rows = bbox.rows();
    let cols = bbox.cols();

    let inside = |r: isize, c: isize| -> bool {
        if r < 0 || c < 0 || r >= rows as isize || c >= cols as isize {
            return false;
        }
        labels.get(bbox.min_row + r as usize, bbox.min_col + c as usize) == label
    };

    // Border image, padded by one cell on each side
    let padded_cols = cols + 2;
    let mut border = vec![false; (rows + 2) * padded_cols];
    for r in 0..rows as isize {
        for c in 0..cols as isize {
            if !inside(r, c) {
                continue;
            }
            let interior = inside(r - 1, c) && inside(r + 1, c) && inside(r, c - 1) && inside(r, c + 1);
            if !interior {
                border[(r as usize + 1) * padded_cols + c as usize + 1] = true;
            }
        }
    }

    // Only border pixels carry an odd code, so the rest weigh nothing
    let mut perimeter = 0.0;
    for r in 1..=rows {
        for c in 1..=cols {
            if !border[r * padded_cols + c] {
                continue;
            }
            let mut code = 0;
            for (kr, kernel_row) in CODE_KERNEL.iter().enumerate() {
                for (kc, weight) in kernel_row.iter().enumerate() {
                    if border[(r + kr - 1) * padded_cols + c + kc - 1] {
                        code += weight;
                    }
                }
            }
            perimeter += code_weight(code);
        }
    }

    perimeter
}
