//! Ordered feature vector
//!
//! A fixed-size array of 30 finite values in schema order, with lookup by
//! field name and a TOML reader for precomputed measurements.

use std::fs;
use log::warn;

use crate::errors::{TumorError, TumorResult};
use super::names::{feature_index, Statistic, BASE_FEATURES, FEATURE_COUNT, FEATURE_NAMES};

/// The 30 named features consumed by the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// The uninformative all-zero vector
    pub fn zeros() -> Self {
        FeatureVector { values: [0.0; FEATURE_COUNT] }
    }

    /// Create a vector from values in schema order
    ///
    /// # Returns
    /// The vector, or `NonFiniteFeature` naming the first NaN/infinite field
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> TumorResult<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(TumorError::NonFiniteFeature(FEATURE_NAMES[index].clone()));
        }
        Ok(FeatureVector { values })
    }

    /// Value of a field by full name
    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|index| self.values[index])
    }

    /// Value of a base descriptor for one statistic
    pub fn value(&self, base_index: usize, statistic: Statistic) -> f64 {
        let offset = match statistic {
            Statistic::Mean => 0,
            Statistic::StandardError => BASE_FEATURES.len(),
            Statistic::Worst => 2 * BASE_FEATURES.len(),
        };
        self.values[offset + base_index]
    }

    /// Values in schema order
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// (name, value) pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        FEATURE_NAMES.iter().map(|n| n.as_str()).zip(self.values.iter().copied())
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Parse a vector from a TOML document holding all 30 fields
    ///
    /// Integer values are accepted. Unknown keys are ignored with a warning.
    pub fn from_toml_str(content: &str) -> TumorResult<Self> {
        let table: toml::Table = content.parse()
            .map_err(|e| TumorError::GenericError(format!("Failed to parse feature TOML: {}", e)))?;

        for key in table.keys() {
            if feature_index(key).is_none() {
                warn!("Ignoring unknown feature field: {}", key);
            }
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (index, name) in FEATURE_NAMES.iter().enumerate() {
            let value = table.get(name)
                .ok_or_else(|| TumorError::MissingFeature(name.clone()))?;

            values[index] = match value {
                toml::Value::Float(f) => *f,
                toml::Value::Integer(i) => *i as f64,
                other => return Err(TumorError::InvalidFeatureValue {
                    name: name.clone(),
                    value: other.to_string(),
                }),
            };

            if !values[index].is_finite() {
                return Err(TumorError::InvalidFeatureValue {
                    name: name.clone(),
                    value: values[index].to_string(),
                });
            }
        }

        Ok(FeatureVector { values })
    }

    /// Load a vector from a TOML file
    pub fn from_file(path: &str) -> TumorResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

