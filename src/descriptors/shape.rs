//! Shape descriptors of the dominant region
//!
//! `concavity`, `concave_points` and `symmetry` are region-property
//! proxies (eccentricity, extent and axis ratio) rather than contour
//! measurements. The classifier was fitted on these proxies.

use std::f64::consts::PI;

use crate::segmentation::RegionProps;

/// Added to the minor axis before dividing
pub const SYMMETRY_EPSILON: f64 = 1e-5;

/// Geometric measurements of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    pub area: f64,
    pub perimeter: f64,
    /// Radius of the circle with the same area
    pub radius: f64,
    /// Isoperimetric ratio, 1 for a circle
    pub compactness: f64,
    /// Eccentricity proxy
    pub concavity: f64,
    /// Extent proxy
    pub concave_points: f64,
    /// Major over minor axis length
    pub symmetry: f64,
}

impl ShapeDescriptor {
    /// Compute the shape descriptors of a region
    pub fn from_region(region: &RegionProps) -> Self {
        let area = region.area as f64;
        let perimeter = region.perimeter;

        let compactness = if area > 0.0 {
            perimeter * perimeter / (4.0 * PI * area)
        } else {
            0.0
        };

        ShapeDescriptor {
            area,
            perimeter,
            radius: (area / PI).sqrt(),
            compactness,
            concavity: region.eccentricity,
            concave_points: region.extent,
            symmetry: region.major_axis_length / (region.minor_axis_length + SYMMETRY_EPSILON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::BoundingBox;

    fn region(area: usize, perimeter: f64, major: f64, minor: f64) -> RegionProps {
        RegionProps {
            label: 1,
            area,
            perimeter,
            centroid: (0.0, 0.0),
            eccentricity: 0.5,
            extent: 0.75,
            major_axis_length: major,
            minor_axis_length: minor,
            mean_intensity: 0.0,
            bbox: BoundingBox { min_row: 0, min_col: 0, max_row: 1, max_col: 1 },
        }
    }

    #[test]
    fn test_proxies_are_copied_from_region() {
        let shape = ShapeDescriptor::from_region(&region(100, 40.0, 12.0, 6.0));
        assert_eq!(shape.concavity, 0.5);
        assert_eq!(shape.concave_points, 0.75);
        assert!((shape.radius - (100.0 / PI).sqrt()).abs() < 1e-12);
        assert!((shape.compactness - 1600.0 / (400.0 * PI)).abs() < 1e-12);
        assert!((shape.symmetry - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_guards() {
        let shape = ShapeDescriptor::from_region(&region(0, 0.0, 0.0, 0.0));
        assert_eq!(shape.compactness, 0.0);
        assert_eq!(shape.symmetry, 0.0);
        assert_eq!(shape.radius, 0.0);
        assert!(ShapeDescriptor::from_region(&region(1, 0.0, 3.0, 0.0)).symmetry.is_finite());
    }
}
