//! Region properties
//!
//! Measures every labeled component against the original scan and picks
//! the dominant one. Ellipse properties come from the second central
//! moments of the pixel coordinates.

use log::debug;

use crate::imaging::Scan;
use super::labeling::LabelMap;
use super::perimeter::region_perimeter;

/// Pixel-aligned bounding box, max bounds exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BoundingBox {
    fn at(row: usize, col: usize) -> Self {
        BoundingBox {
            min_row: row,
            min_col: col,
            max_row: row + 1,
            max_col: col + 1,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row + 1);
        self.max_col = self.max_col.max(col + 1);
    }

    pub fn rows(&self) -> usize {
        self.max_row - self.min_row
    }

    pub fn cols(&self) -> usize {
        self.max_col - self.min_col
    }

    pub fn area(&self) -> usize {
        self.rows() * self.cols()
    }
}

/// Scalar properties of one connected component
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProps {
    /// Component label
    pub label: usize,
    /// Pixel count
    pub area: usize,
    /// Weighted border length
    pub perimeter: f64,
    /// Centroid as (row, col)
    pub centroid: (f64, f64),
    /// Eccentricity of the best-fit ellipse, 0 for a circle
    pub eccentricity: f64,
    /// Area over bounding-box area
    pub extent: f64,
    pub major_axis_length: f64,
    pub minor_axis_length: f64,
    /// Mean scan intensity over the component
    pub mean_intensity: f64,
    pub bbox: BoundingBox,
}

#[derive(Default)]
struct Accumulator {
    area: usize,
    sum_r: f64,
    sum_c: f64,
    sum_rr: f64,
    sum_cc: f64,
    sum_rc: f64,
    sum_intensity: f64,
    bbox: Option<BoundingBox>,
}

impl Accumulator {
    fn add(&mut self, row: usize, col: usize, intensity: u8) {
        let (r, c) = (row as f64, col as f64);
        self.area += 1;
        self.sum_r += r;
        self.sum_c += c;
        self.sum_rr += r * r;
        self.sum_cc += c * c;
        self.sum_rc += r * c;
        self.sum_intensity += intensity as f64;
        match self.bbox.as_mut() {
            Some(bbox) => bbox.include(row, col),
            None => self.bbox = Some(BoundingBox::at(row, col)),
        }
    }
}

/// Ellipse axes and eccentricity from normalised central moments
fn ellipse_from_moments(mu_rr: f64, mu_cc: f64, mu_rc: f64) -> (f64, f64, f64) {
    let half_sum = (mu_rr + mu_cc) / 2.0;
    let spread = (((mu_rr - mu_cc) / 2.0).powi(2) + mu_rc * mu_rc).sqrt();
    let l1 = (half_sum + spread).max(0.0);
    let l2 = (half_sum - spread).max(0.0);

    let eccentricity = if l1 > 0.0 { (1.0 - l2 / l1).max(0.0).sqrt() } else { 0.0 };
    (4.0 * l1.sqrt(), 4.0 * l2.sqrt(), eccentricity)
}

/// Measure every component of a label map
///
/// # Arguments
/// * `labels` - Component labels
/// * `scan` - Intensity source with the same dimensions
///
/// # Returns
/// One entry per label, in label order
pub fn measure_regions(labels: &LabelMap, scan: &Scan) -> Vec<RegionProps> {
    let mut accumulators: Vec<Accumulator> = (0..labels.count()).map(|_| Accumulator::default()).collect();

    for row in 0..labels.height() {
        for col in 0..labels.width() {
            let label = labels.get(row, col);
            if label > 0 {
                accumulators[label - 1].add(row, col, scan.get(row, col));
            }
        }
    }

    accumulators.into_iter()
        .enumerate()
        .filter_map(|(index, acc)| {
            let bbox = acc.bbox?;
            let label = index + 1;
            let n = acc.area as f64;

            let mean_r = acc.sum_r / n;
            let mean_c = acc.sum_c / n;
            let mu_rr = acc.sum_rr / n - mean_r * mean_r;
            let mu_cc = acc.sum_cc / n - mean_c * mean_c;
            let mu_rc = acc.sum_rc / n - mean_r * mean_c;
            let (major_axis_length, minor_axis_length, eccentricity) =
                ellipse_from_moments(mu_rr, mu_cc, mu_rc);

            Some(RegionProps {
                label,
                area: acc.area,
                perimeter: region_perimeter(labels, label, &bbox),
                centroid: (mean_r, mean_c),
                eccentricity,
                extent: n / bbox.area() as f64,
                major_axis_length,
                minor_axis_length,
                mean_intensity: acc.sum_intensity / n,
                bbox,
            })
        })
        .collect()
}

/// Select the region with the largest area; ties go to the lowest label
pub fn dominant_region(regions: &[RegionProps]) -> Option<&RegionProps> {
    let mut best: Option<&RegionProps> = None;
    for region in regions {
        match best {
            Some(current) if region.area <= current.area => {}
            _ => best = Some(region),
        }
    }

    if let Some(region) = best {
        debug!("Dominant region: label {} with area {} (of {} regions)",
               region.label, region.area, regions.len());
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Connectivity;
    use crate::imaging::BinaryMask;
    use crate::segmentation::label_components;

    fn regions_of(mask: &BinaryMask, scan: &Scan) -> Vec<RegionProps> {
        measure_regions(&label_components(mask, Connectivity::Eight), scan)
    }

    #[test]
    fn test_rectangle_properties() {
        let mask = BinaryMask::from_fn(20, 20, |row, col| (5..9).contains(&row) && (2..12).contains(&col));
        let scan = Scan::from_fn(20, 20, |row, col| if mask.get(row, col) { 150 } else { 0 }).unwrap();
        let regions = regions_of(&mask, &scan);

        assert_eq!(regions.len(), 1);
        let region = &regions[0];
        assert_eq!(region.area, 40);
        assert_eq!(region.bbox, BoundingBox { min_row: 5, min_col: 2, max_row: 9, max_col: 12 });
        assert_eq!(region.extent, 1.0);
        assert_eq!(region.mean_intensity, 150.0);
        assert_eq!(region.centroid, (6.5, 6.5));
        // straight border: 2 * (4 + 10) - 4 pixels
        assert!((region.perimeter - 24.0).abs() < 1e-9);
        assert!(region.major_axis_length > region.minor_axis_length);
        assert!(region.eccentricity > 0.9);
    }

    #[test]
    fn test_single_pixel_region() {
        let mask = BinaryMask::from_fn(3, 3, |row, col| row == 1 && col == 1);
        let scan = Scan::new(3, 3, vec![7; 9]).unwrap();
        let region = regions_of(&mask, &scan).remove(0);

        assert_eq!(region.area, 1);
        assert_eq!(region.eccentricity, 0.0);
        assert_eq!(region.major_axis_length, 0.0);
        assert_eq!(region.minor_axis_length, 0.0);
        assert_eq!(region.perimeter, 0.0);
        assert_eq!(region.extent, 1.0);
    }

    #[test]
    fn test_dominant_region_tie_breaks_on_label() {
        let mask = BinaryMask::from_fn(10, 3, |row, col| row == 1 && (col < 3 || col > 6));
        let scan = Scan::new(10, 3, vec![1; 30]).unwrap();
        let regions = regions_of(&mask, &scan);
        assert_eq!(regions.len(), 2);

        let dominant = dominant_region(&regions).unwrap();
        assert_eq!(dominant.label, 1);
        assert_eq!(dominant.bbox.min_col, 0);
        assert!(dominant_region(&[]).is_none());
    }
}
