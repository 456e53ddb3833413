//! Prediction command
//!
//! Classifies each input, either an image (features are extracted first)
//! or a TOML file holding precomputed features.

use clap::ArgMatches;
use log::{error, info};

use crate::api::TumorKit;
use crate::commands::command_traits::Command;
use crate::commands::{batch_result, parse_common_args};
use crate::errors::TumorResult;
use crate::utils::format_utils::{render_predictions, write_output, OutputFormat};
use crate::utils::progress::ProgressTracker;

/// Command for predicting malignancy
pub struct PredictCommand<'a> {
    /// Image paths or feature files
    inputs: Vec<String>,
    /// Whether inputs are feature files rather than images
    from_features: bool,
    /// Rendering format
    format: OutputFormat,
    /// Output path, stdout when absent
    output_file: Option<String>,
    kit: &'a TumorKit,
}

impl<'a> PredictCommand<'a> {
    /// Create a new predict command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured extractor and classifier
    ///
    /// # Returns
    /// A new PredictCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a TumorKit) -> TumorResult<Self> {
        let (inputs, format, output_file) = parse_common_args(args)?;
        Ok(PredictCommand {
            inputs,
            from_features: args.get_flag("from-features"),
            format,
            output_file,
            kit,
        })
    }
}

impl<'a> Command for PredictCommand<'a> {
    fn execute(&self) -> TumorResult<()> {
        info!("Predicting {} input(s) with classifier '{}'",
              self.inputs.len(), self.kit.classifier().name());

        let progress = if self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, "Predicting")
        } else {
            ProgressTracker::hidden()
        };

        let mut reports = Vec::with_capacity(self.inputs.len());
        let mut failed = 0;
        for input in &self.inputs {
            progress.set_message(input);
            let result = if self.from_features {
                self.kit.predict_feature_file(input)
            } else {
                self.kit.predict_image(input)
            };

            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!("Failed to predict {}: {}", input, e);
                    failed += 1;
                }
            }
            progress.increment(1);
        }
        progress.finish();

        if !reports.is_empty() {
            let rendered = render_predictions(&reports, self.format)?;
            write_output(&rendered, self.output_file.as_deref())?;
        }

        batch_result(failed, self.inputs.len())
    }
}
