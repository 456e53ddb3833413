//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::features::FeatureVector;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` for a silent logger
    file: Mutex<Option<File>>,
    /// Most verbose level echoed to the console
    console_level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            console_level: Level::Info,
        })
    }

    /// Creates a logger that discards file output
    pub fn silent() -> Self {
        Logger {
            file: Mutex::new(None),
            console_level: Level::Info,
        }
    }

    /// Sets the most verbose level echoed to the console
    pub fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a feature vector as one `name = value` line per field
    ///
    /// # Arguments
    ///
    /// * `source` - Image or file the features came from
    /// * `features` - The feature vector
    pub fn log_features(&self, source: &str, features: &FeatureVector) -> io::Result<()> {
        self.log(&format!("Features for {}:", source))?;

        for (name, value) in features.iter() {
            self.log(&format!("  {:<24} {:.6}", name, value))?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, console_level: Level) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?.with_console_level(console_level);

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Console output goes to stderr so stdout stays machine-readable
            if record.level() <= self.console_level {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_log_features_writes_every_field() {
        let path = std::env::temp_dir().join("tumorkit_logger_test.log");
        let path_str = path.to_string_lossy().to_string();

        let logger = Logger::new(&path_str).unwrap();
        logger.log_features("disk.png", &FeatureVector::zeros()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Features for disk.png:"));
        assert_eq!(contents.lines().count(), 31);
        assert!(contents.contains("fractal_dimension_worst"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_silent_logger_accepts_messages() {
        assert!(Logger::silent().log("discarded").is_ok());
    }
}
