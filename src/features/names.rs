//! Feature schema
//!
//! Ten base descriptors, each reported as `_mean`, `_se` and `_worst`.
//! Fields are ordered by statistic first, then by base name, which is the
//! column order the classifier consumes.

use lazy_static::lazy_static;

/// Base descriptor names in schema order
pub const BASE_FEATURES: [&str; 10] = [
    "radius",
    "texture",
    "perimeter",
    "area",
    "smoothness",
    "compactness",
    "concavity",
    "concave_points",
    "symmetry",
    "fractal_dimension",
];

/// Number of fields in a feature vector
pub const FEATURE_COUNT: usize = 30;

/// Statistic suffix of a feature field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    StandardError,
    Worst,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Mean, Statistic::StandardError, Statistic::Worst];

    pub fn suffix(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::StandardError => "se",
            Statistic::Worst => "worst",
        }
    }
}

/// Full field name, e.g. `concave_points_se`
pub fn feature_name(base: &str, statistic: Statistic) -> String {
    format!("{}_{}", base, statistic.suffix())
}

lazy_static! {
    /// All 30 field names in schema order
    pub static ref FEATURE_NAMES: Vec<String> = Statistic::ALL
        .iter()
        .flat_map(|stat| BASE_FEATURES.iter().map(move |base| feature_name(base, *stat)))
        .collect();
}

/// Schema index of a field name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|n| n == name)
}
