//! Output formatting utilities
//!
//! Renders feature vectors and prediction reports as plain text, CSV,
//! JSON or TOML, and writes the result to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use log::info;

use crate::api::PredictionReport;
use crate::errors::{TumorError, TumorResult};
use crate::features::{FeatureVector, FEATURE_NAMES};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Toml,
}

impl OutputFormat {
    /// Parse a format name
    pub fn from_name(name: &str) -> TumorResult<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(TumorError::GenericError(format!(
                "Unsupported output format '{}'. Expected text, csv, json or toml", name))),
        }
    }
}

fn escape_json(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn json_features(features: &FeatureVector, indent: &str) -> String {
    let fields: Vec<String> = features.iter()
        .map(|(name, value)| format!("{}  \"{}\": {}", indent, name, value))
        .collect();
    format!("{{\n{}\n{}}}", fields.join(",\n"), indent)
}

fn toml_features(features: &FeatureVector) -> toml::Table {
    let mut table = toml::Table::new();
    for (name, value) in features.iter() {
        table.insert(name.to_string(), toml::Value::Float(value));
    }
    table
}

fn toml_document(key: &str, entries: Vec<toml::Table>) -> TumorResult<String> {
    let mut document = toml::Table::new();
    document.insert(
        key.to_string(),
        toml::Value::Array(entries.into_iter().map(toml::Value::Table).collect()),
    );
    toml::to_string(&document)
        .map_err(|e| TumorError::GenericError(format!("Failed to render TOML: {}", e)))
}

/// Render the feature vectors of several sources
///
/// # Arguments
/// * `results` - (source, features) pairs
/// * `format` - Output format
///
/// # Returns
/// The rendered document
pub fn render_features(results: &[(String, FeatureVector)], format: OutputFormat) -> TumorResult<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for (source, features) in results {
                out.push_str(&format!("Features for {}:\n", source));
                for (name, value) in features.iter() {
                    out.push_str(&format!("  {:<24} {:.6}\n", name, value));
                }
            }
        }
        OutputFormat::Csv => {
            out.push_str("source");
            for name in FEATURE_NAMES.iter() {
                out.push(',');
                out.push_str(name);
            }
            out.push('\n');
            for (source, features) in results {
                out.push_str(&escape_csv(source));
                for value in features.as_array() {
                    out.push_str(&format!(",{}", value));
                }
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let entries: Vec<String> = results.iter()
                .map(|(source, features)| format!(
                    "  {{\n    \"source\": \"{}\",\n    \"features\": {}\n  }}",
                    escape_json(source), json_features(features, "    ")))
                .collect();
            out.push_str(&format!("[\n{}\n]\n", entries.join(",\n")));
        }
        OutputFormat::Toml => {
            let entries = results.iter()
                .map(|(source, features)| {
                    let mut entry = toml::Table::new();
                    entry.insert("source".to_string(), toml::Value::String(source.clone()));
                    entry.insert("features".to_string(), toml::Value::Table(toml_features(features)));
                    entry
                })
                .collect();
            out.push_str(&toml_document("results", entries)?);
        }
    }
    Ok(out)
}

/// Render prediction reports
pub fn render_predictions(reports: &[PredictionReport], format: OutputFormat) -> TumorResult<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for report in reports {
                let confidence = report.prediction.confidence
                    .map(|c| format!("{:.1}%", c * 100.0))
                    .unwrap_or_else(|| "n/a".to_string());
                out.push_str(&format!("{}: {} (confidence: {})\n",
                                      report.source, report.prediction.diagnosis, confidence));
            }
        }
        OutputFormat::Csv => {
            out.push_str("source,prediction,confidence\n");
            for report in reports {
                let confidence = report.prediction.confidence.map(|c| c.to_string()).unwrap_or_default();
                out.push_str(&format!("{},{},{}\n",
                                      escape_csv(&report.source), report.prediction.diagnosis, confidence));
            }
        }
        OutputFormat::Json => {
            let entries: Vec<String> = reports.iter()
                .map(|report| {
                    let confidence = report.prediction.confidence
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "null".to_string());
                    let mut entry = format!(
                        "  {{\n    \"source\": \"{}\",\n    \"prediction\": \"{}\",\n    \"confidence\": {}",
                        escape_json(&report.source), report.prediction.diagnosis, confidence);
                    if let Some(features) = &report.features {
                        entry.push_str(&format!(",\n    \"features\": {}", json_features(features, "    ")));
                    }
                    entry.push_str("\n  }");
                    entry
                })
                .collect();
            out.push_str(&format!("[\n{}\n]\n", entries.join(",\n")));
        }
        OutputFormat::Toml => {
            let entries = reports.iter()
                .map(|report| {
                    let mut entry = toml::Table::new();
                    entry.insert("source".to_string(), toml::Value::String(report.source.clone()));
                    entry.insert("prediction".to_string(),
                                 toml::Value::String(report.prediction.diagnosis.to_string()));
                    if let Some(confidence) = report.prediction.confidence {
                        entry.insert("confidence".to_string(), toml::Value::Float(confidence));
                    }
                    if let Some(features) = &report.features {
                        entry.insert("features".to_string(), toml::Value::Table(toml_features(features)));
                    }
                    entry
                })
                .collect();
            out.push_str(&toml_document("predictions", entries)?);
        }
    }
    Ok(out)
}

/// Write rendered output to a file, or to stdout when no path is given
pub fn write_output(content: &str, output_path: Option<&str>) -> TumorResult<()> {
    match output_path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
            info!("Wrote output to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Diagnosis, Prediction};

    fn sample() -> Vec<(String, FeatureVector)> {
        vec![("scan, 1.png".to_string(), FeatureVector::zeros())]
    }

    #[test]
    fn test_csv_has_header_and_quoted_source() {
        let csv = render_features(&sample(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("source,radius_mean,texture_mean"));
        assert_eq!(header.split(',').count(), 31);
        assert!(lines.next().unwrap().starts_with("\"scan, 1.png\",0,"));
    }

    #[test]
    fn test_toml_features_parse_back() {
        let rendered = render_features(&sample(), OutputFormat::Toml).unwrap();
        let parsed: toml::Table = rendered.parse().unwrap();
        let results = parsed["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        let features = results[0]["features"].as_table().unwrap();
        assert_eq!(features.len(), 30);
    }

    #[test]
    fn test_prediction_json_and_text() {
        let reports = vec![PredictionReport {
            source: "a\"b".to_string(),
            prediction: Prediction { diagnosis: Diagnosis::Malignant, confidence: None },
            features: None,
        }];
        let json = render_predictions(&reports, OutputFormat::Json).unwrap();
        assert!(json.contains("\"source\": \"a\\\"b\""));
        assert!(json.contains("\"confidence\": null"));

        let text = render_predictions(&reports, OutputFormat::Text).unwrap();
        assert_eq!(text, "a\"b: Malignant (confidence: n/a)\n");
    }

    #[test]
    fn test_json_escapes_control_characters_in_source() {
        let results = vec![("scan\u{1}\tname\\x.png".to_string(), FeatureVector::zeros())];
        let json = render_features(&results, OutputFormat::Json).unwrap();
        assert!(json.contains("\"source\": \"scan\\u0001\\tname\\\\x.png\""));
        assert!(!json.contains('\u{1}'));
        assert!(!json.contains('\t'));
    }

    #[test]
    fn test_unknown_format() {
        assert!(OutputFormat::from_name("xml").is_err());
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
    }
}
