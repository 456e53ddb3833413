//! Standardised logistic regression model

use crate::features::FEATURE_COUNT;
use super::model::{Classifier, Diagnosis};

/// Linear model over standardised features
///
/// `p(malignant) = sigmoid(intercept + sum(w_i * (x_i - center_i) / scale_i))`
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    name: String,
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
    center: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    threshold: f64,
}

impl LogisticModel {
    /// Create a model
    ///
    /// Non-positive or non-finite scales are replaced by 1.
    pub fn new(
        name: &str,
        intercept: f64,
        coefficients: [f64; FEATURE_COUNT],
        center: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
        threshold: f64,
    ) -> Self {
        let mut scale = scale;
        for s in scale.iter_mut() {
            if !s.is_finite() || *s <= 0.0 {
                *s = 1.0;
            }
        }

        LogisticModel {
            name: name.to_string(),
            intercept,
            coefficients,
            center,
            scale,
            threshold,
        }
    }

    /// Decision function value
    pub fn decision(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut z = self.intercept;
        for i in 0..FEATURE_COUNT {
            z += self.coefficients[i] * (features[i] - self.center[i]) / self.scale[i];
        }
        z
    }

    /// Probability of the malignant class
    pub fn malignant_probability(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        1.0 / (1.0 + (-self.decision(features)).exp())
    }
}

impl Classifier for LogisticModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Diagnosis {
        if self.malignant_probability(features) >= self.threshold {
            Diagnosis::Malignant
        } else {
            Diagnosis::Benign
        }
    }

    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Option<[f64; 2]> {
        let p = self.malignant_probability(features);
        Some([1.0 - p, p])
    }
}
