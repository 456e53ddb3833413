//! Feature extraction command
//!
//! Extracts the 30-field feature vector from each input image and
//! renders the results in the requested format.

use clap::ArgMatches;
use log::{error, info};

use crate::api::TumorKit;
use crate::commands::command_traits::Command;
use crate::commands::{batch_result, parse_common_args};
use crate::errors::TumorResult;
use crate::utils::format_utils::{render_features, write_output, OutputFormat};
use crate::utils::progress::ProgressTracker;

/// Command for extracting features from images
pub struct ExtractCommand<'a> {
    /// Image paths
    inputs: Vec<String>,
    /// Rendering format
    format: OutputFormat,
    /// Output path, stdout when absent
    output_file: Option<String>,
    kit: &'a TumorKit,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured extractor and classifier
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a TumorKit) -> TumorResult<Self> {
        let (inputs, format, output_file) = parse_common_args(args)?;
        Ok(ExtractCommand {
            inputs,
            format,
            output_file,
            kit,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> TumorResult<()> {
        info!("Extracting features from {} image(s)", self.inputs.len());

        let progress = if self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, "Extracting features")
        } else {
            ProgressTracker::hidden()
        };

        let mut results = Vec::with_capacity(self.inputs.len());
        let mut failed = 0;
        for input in &self.inputs {
            progress.set_message(input);
            match self.kit.extract_features(input) {
                Ok(features) => results.push((input.clone(), features)),
                Err(e) => {
                    error!("Failed to extract features from {}: {}", input, e);
                    failed += 1;
                }
            }
            progress.increment(1);
        }
        progress.finish();

        if !results.is_empty() {
            let rendered = render_features(&results, self.format)?;
            write_output(&rendered, self.output_file.as_deref())?;
        }

        batch_result(failed, self.inputs.len())
    }
}
