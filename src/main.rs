use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, Level};

use tumorkit::api::TumorKit;
use tumorkit::config::ExtractionConfig;
use tumorkit::utils::logger::Logger;
use tumorkit::commands::{CommandFactory, TumorkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("TumorKit")
        .version("0.1")
        .about("Extract tumor features from scans and predict malignancy")
        .arg(
            Arg::new("input")
                .help("Input image(s), or feature TOML file(s) with --from-features")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo debug output to the console")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("predict")
                .short('p')
                .long("predict")
                .help("Classify the inputs instead of only extracting features")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from-features")
                .long("from-features")
                .help("Treat inputs as TOML feature files and classify them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .help("Model description (TOML) to use instead of the bundled one")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Extraction configuration (TOML)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text, csv, json, toml)")
                .value_name("FORMAT")
                .default_value("text")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let console_level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };
    if let Err(e) = Logger::init_global_logger("tumorkit-global.log", console_level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let mut kit = match TumorKit::new(Some("tumorkit.log")) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error initializing: {}", e);
            process::exit(1);
        }
    };

    if let Some(config_path) = matches.get_one::<String>("config") {
        match ExtractionConfig::from_file(config_path) {
            Ok(config) => kit = kit.with_config(config),
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    if let Some(model_path) = matches.get_one::<String>("model") {
        kit = match kit.with_model_file(model_path) {
            Ok(kit) => kit,
            Err(e) => {
                error!("Failed to load model: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
    }

    let factory = TumorkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
