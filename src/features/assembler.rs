//! Feature assembler
//!
//! Expands the ten raw descriptors into mean/se/worst triples. `se` is
//! the raw value scaled by 1/sqrt(area) and `worst` repeats the raw
//! value; both are approximations the classifier was trained with.

use crate::descriptors::{ShapeDescriptor, TextureDescriptor};
use crate::errors::TumorResult;
use super::names::{BASE_FEATURES, FEATURE_COUNT};
use super::vector::FeatureVector;

/// Raw descriptor values of the dominant region, one per base feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDescriptors {
    pub radius: f64,
    pub texture: f64,
    pub perimeter: f64,
    pub area: f64,
    pub smoothness: f64,
    pub compactness: f64,
    pub concavity: f64,
    pub concave_points: f64,
    pub symmetry: f64,
    pub fractal_dimension: f64,
}

impl RawDescriptors {
    /// Combine the per-component descriptors
    pub fn from_parts(shape: &ShapeDescriptor, texture: &TextureDescriptor, fractal_dimension: f64) -> Self {
        RawDescriptors {
            radius: shape.radius,
            texture: texture.texture,
            perimeter: shape.perimeter,
            area: shape.area,
            smoothness: texture.smoothness,
            compactness: shape.compactness,
            concavity: shape.concavity,
            concave_points: shape.concave_points,
            symmetry: shape.symmetry,
            fractal_dimension,
        }
    }

    /// Values in base-feature order
    pub fn as_array(&self) -> [f64; 10] {
        [
            self.radius,
            self.texture,
            self.perimeter,
            self.area,
            self.smoothness,
            self.compactness,
            self.concavity,
            self.concave_points,
            self.symmetry,
            self.fractal_dimension,
        ]
    }
}

/// Build the 30-field vector from raw descriptors
///
/// # Arguments
/// * `raw` - Raw descriptors of the dominant region
/// * `region_area` - Pixel area used for the `se` scaling
///
/// # Returns
/// The assembled vector, or `NonFiniteFeature` if a descriptor was NaN
/// or infinite
pub fn assemble(raw: &RawDescriptors, region_area: usize) -> TumorResult<FeatureVector> {
    let n = BASE_FEATURES.len();
    let root_area = (region_area as f64).sqrt();
    let mut values = [0.0; FEATURE_COUNT];

    for (i, value) in raw.as_array().iter().enumerate() {
        values[i] = *value;
        values[n + i] = if region_area > 0 { value / root_area } else { 0.0 };
        values[2 * n + i] = *value;
    }

    FeatureVector::from_values(values)
}
