//! Classifier descriptions
//!
//! Models are described in TOML. A logistic model lists its intercept
//! and per-feature `coefficients`, `center` and `scale` tables (missing
//! features default to weight 0, center 0, scale 1). A voting model
//! lists logistic `estimators` and a `voting` strategy.

use std::fs;
use std::sync::Arc;
use lazy_static::lazy_static;
use log::{debug, info};

use crate::errors::{TumorError, TumorResult};
use crate::features::{feature_index, FEATURE_COUNT};
use super::logistic::LogisticModel;
use super::model::Classifier;
use super::voting::{VotingModel, VotingStrategy};

lazy_static! {
    // Parsed once, shared read-only afterwards
    static ref DEFAULT_CLASSIFIER: Option<Arc<dyn Classifier>> = {
        let content = include_str!("../../model/default_model.toml");
        parse_classifier(content).map_err(|e| {
                eprintln!("Warning: Failed to parse bundled model description: {}", e);
            })
            .ok()
    };
}

/// The bundled classifier
pub fn default_classifier() -> TumorResult<Arc<dyn Classifier>> {
    DEFAULT_CLASSIFIER.clone()
        .ok_or_else(|| TumorError::ModelError("bundled model description is invalid".to_string()))
}

/// Load a classifier description from a TOML file
pub fn load_classifier(path: &str) -> TumorResult<Arc<dyn Classifier>> {
    info!("Loading model description {}", path);
    let contents = fs::read_to_string(path)?;
    parse_classifier(&contents)
}

/// Parse a classifier description
pub fn parse_classifier(content: &str) -> TumorResult<Arc<dyn Classifier>> {
    let table: toml::Table = content.parse()
        .map_err(|e| TumorError::ModelError(format!("Failed to parse TOML: {}", e)))?;

    match read_kind(&table)? {
        "logistic" => Ok(Arc::new(parse_logistic(&table)?)),
        "voting" => Ok(Arc::new(parse_voting(&table)?)),
        other => Err(TumorError::ModelError(format!("Unknown model kind: {}", other))),
    }
}

fn read_kind(table: &toml::Table) -> TumorResult<&str> {
    table.get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| TumorError::ModelError("Missing model kind".to_string()))
}

fn read_name<'a>(table: &'a toml::Table, default: &'a str) -> &'a str {
    table.get("name").and_then(|v| v.as_str()).unwrap_or(default)
}

fn read_number(value: &toml::Value, key: &str) -> TumorResult<f64> {
    match value {
        toml::Value::Float(f) if f.is_finite() => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        _ => Err(TumorError::ModelError(format!("{} must be a finite number", key))),
    }
}

/// Read a per-feature table into an array, starting from `default`
fn read_feature_table(table: &toml::Table, key: &str, default: f64) -> TumorResult<[f64; FEATURE_COUNT]> {
    let mut values = [default; FEATURE_COUNT];
    let entries = match table.get(key) {
        Some(toml::Value::Table(entries)) => entries,
        Some(_) => return Err(TumorError::ModelError(format!("{} must be a table", key))),
        None => return Ok(values),
    };

    for (name, value) in entries {
        let index = feature_index(name)
            .ok_or_else(|| TumorError::ModelError(format!("Unknown feature in {}: {}", key, name)))?;
        values[index] = read_number(value, name)?;
    }

    Ok(values)
}

fn parse_logistic(table: &toml::Table) -> TumorResult<LogisticModel> {
    let intercept = match table.get("intercept") {
        Some(value) => read_number(value, "intercept")?,
        None => 0.0,
    };
    let threshold = match table.get("threshold") {
        Some(value) => read_number(value, "threshold")?,
        None => 0.5,
    };
    if !(0.0..=1.0).contains(&threshold) {
        return Err(TumorError::ModelError(format!("threshold must be in [0, 1], got {}", threshold)));
    }

    let model = LogisticModel::new(
        read_name(table, "logistic"),
        intercept,
        read_feature_table(table, "coefficients", 0.0)?,
        read_feature_table(table, "center", 0.0)?,
        read_feature_table(table, "scale", 1.0)?,
        threshold,
    );
    debug!("Parsed logistic model '{}'", read_name(table, "logistic"));
    Ok(model)
}

fn parse_voting(table: &toml::Table) -> TumorResult<VotingModel> {
    let strategy = match table.get("voting").and_then(|v| v.as_str()).unwrap_or("soft") {
        "soft" => VotingStrategy::Soft,
        "hard" => VotingStrategy::Hard,
        other => return Err(TumorError::ModelError(format!("Unknown voting strategy: {}", other))),
    };

    let estimators = table.get("estimators")
        .and_then(|v| v.as_array())
        .ok_or_else(|| TumorError::ModelError("Voting model needs an estimators array".to_string()))?;
    if estimators.is_empty() {
        return Err(TumorError::ModelError("Voting model has no estimators".to_string()));
    }

    let mut members = Vec::with_capacity(estimators.len());
    for estimator in estimators {
        let member = estimator.as_table()
            .ok_or_else(|| TumorError::ModelError("Estimator must be a table".to_string()))?;
        match read_kind(member)? {
            "logistic" => members.push(parse_logistic(member)?),
            other => return Err(TumorError::ModelError(format!("Unsupported estimator kind: {}", other))),
        }
    }

    debug!("Parsed voting model with {} estimators ({:?})", members.len(), strategy);
    Ok(VotingModel::new(read_name(table, "voting"), strategy, members))
}
