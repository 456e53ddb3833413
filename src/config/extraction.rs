//! Extraction configuration
//!
//! Defaults reproduce the constants the downstream classifier was trained
//! against. Changing them changes the produced feature values.

use std::fs;
use log::debug;
use crate::errors::{TumorError, TumorResult};

/// Default minimum size (in pixels) of a foreground component kept after noise removal
pub const DEFAULT_MIN_OBJECT_SIZE: usize = 50;
/// Threshold used when Otsu's method has no split to choose from
pub const DEFAULT_FALLBACK_THRESHOLD: u8 = 128;
/// Number of gray levels of the co-occurrence matrix
pub const DEFAULT_GLCM_LEVELS: usize = 256;
/// Pixel offset of the co-occurrence pairs
pub const DEFAULT_GLCM_DISTANCE: usize = 1;

/// Pixel adjacency rule for connected components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Horizontal and vertical neighbours only
    Four,
    /// Horizontal, vertical and diagonal neighbours
    Eight,
}

impl Connectivity {
    /// Parse a connectivity name ("four"/"4" or "eight"/"8")
    pub fn from_name(name: &str) -> TumorResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "four" | "4" => Ok(Connectivity::Four),
            "eight" | "8" => Ok(Connectivity::Eight),
            other => Err(TumorError::ConfigError(format!("Unknown connectivity: {}", other))),
        }
    }

}

impl From<Connectivity> for imageproc::region_labelling::Connectivity {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => imageproc::region_labelling::Connectivity::Four,
            Connectivity::Eight => imageproc::region_labelling::Connectivity::Eight,
        }
    }
}

/// Constants driving the image-to-feature pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Components smaller than this are removed before labeling
    pub min_object_size: usize,
    /// Threshold used for uniform images
    pub fallback_threshold: u8,
    /// Adjacency used to label the tumor candidates
    pub label_connectivity: Connectivity,
    /// Adjacency used by the small-object noise filter
    pub noise_connectivity: Connectivity,
    /// Gray levels of the co-occurrence matrix
    pub glcm_levels: usize,
    /// Horizontal offset of the co-occurrence pairs
    pub glcm_distance: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            min_object_size: DEFAULT_MIN_OBJECT_SIZE,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            label_connectivity: Connectivity::Eight,
            noise_connectivity: Connectivity::Four,
            glcm_levels: DEFAULT_GLCM_LEVELS,
            glcm_distance: DEFAULT_GLCM_DISTANCE,
        }
    }
}

impl ExtractionConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Keys are read from an `[extraction]` table; every key is optional
    /// and falls back to its default.
    ///
    /// # Arguments
    /// * `content` - TOML document
    ///
    /// # Returns
    /// The parsed configuration or a `ConfigError`
    pub fn from_str(content: &str) -> TumorResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| TumorError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = ExtractionConfig::default();
        let table = match toml_value.get("extraction").and_then(|v| v.as_table()) {
            Some(table) => table,
            None => {
                debug!("No [extraction] table found, using defaults");
                return Ok(config);
            }
        };

        if let Some(value) = table.get("min_object_size") {
            config.min_object_size = Self::read_unsigned(value, "min_object_size")? as usize;
        }
        if let Some(value) = table.get("fallback_threshold") {
            let threshold = Self::read_unsigned(value, "fallback_threshold")?;
            config.fallback_threshold = u8::try_from(threshold)
                .map_err(|_| TumorError::ConfigError(format!("fallback_threshold out of range: {}", threshold)))?;
        }
        if let Some(value) = table.get("label_connectivity") {
            config.label_connectivity = Self::read_connectivity(value, "label_connectivity")?;
        }
        if let Some(value) = table.get("noise_connectivity") {
            config.noise_connectivity = Self::read_connectivity(value, "noise_connectivity")?;
        }
        if let Some(value) = table.get("glcm_levels") {
            config.glcm_levels = Self::read_unsigned(value, "glcm_levels")? as usize;
        }
        if let Some(value) = table.get("glcm_distance") {
            config.glcm_distance = Self::read_unsigned(value, "glcm_distance")? as usize;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> TumorResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Check value ranges
    pub fn validate(&self) -> TumorResult<()> {
        if self.glcm_levels == 0 || self.glcm_levels > 256 {
            return Err(TumorError::ConfigError(format!(
                "glcm_levels must be between 1 and 256, got {}", self.glcm_levels)));
        }
        if self.glcm_distance == 0 {
            return Err(TumorError::ConfigError("glcm_distance must be at least 1".to_string()));
        }
        Ok(())
    }

    fn read_unsigned(value: &toml::Value, key: &str) -> TumorResult<u64> {
        match value.as_integer() {
            Some(v) if v >= 0 => Ok(v as u64),
            _ => Err(TumorError::ConfigError(format!("{} must be a non-negative integer", key))),
        }
    }

    fn read_connectivity(value: &toml::Value, key: &str) -> TumorResult<Connectivity> {
        if let Some(name) = value.as_str() {
            return Connectivity::from_name(name);
        }
        if let Some(number) = value.as_integer() {
            return Connectivity::from_name(&number.to_string());
        }
        Err(TumorError::ConfigError(format!("{} must be \"four\" or \"eight\"", key)))
    }
}
