//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod predict_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use predict_command::PredictCommand;

use clap::ArgMatches;
use crate::api::TumorKit;
use crate::errors::{TumorError, TumorResult};
use crate::utils::format_utils::OutputFormat;

/// Factory for creating command instances based on CLI arguments
pub struct TumorkitCommandFactory;

impl TumorkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TumorkitCommandFactory
    }
}

impl Default for TumorkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for TumorkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a TumorKit) -> TumorResult<Box<dyn Command + 'a>> {
        if args.get_flag("predict") || args.get_flag("from-features") {
            Ok(Box::new(PredictCommand::new(args, kit)?))
        } else {
            // Default to feature extraction
            Ok(Box::new(ExtractCommand::new(args, kit)?))
        }
    }
}

/// Shared argument parsing for input lists, output format and output path
pub(crate) fn parse_common_args(args: &ArgMatches) -> TumorResult<(Vec<String>, OutputFormat, Option<String>)> {
    let inputs: Vec<String> = args.get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    if inputs.is_empty() {
        return Err(TumorError::GenericError("Missing input file".to_string()));
    }

    let format = match args.get_one::<String>("format") {
        Some(name) => OutputFormat::from_name(name)?,
        None => OutputFormat::Text,
    };

    let output = args.get_one::<String>("output").cloned();
    Ok((inputs, format, output))
}

/// Turn a failure count into the command result
pub(crate) fn batch_result(failed: usize, total: usize) -> TumorResult<()> {
    if failed > 0 {
        Err(TumorError::GenericError(format!("{} of {} inputs failed", failed, total)))
    } else {
        Ok(())
    }
}
