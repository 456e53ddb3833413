//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and output formatting
//! used by the command-line front end.

pub mod logger;
pub mod progress;
pub mod format_utils;
