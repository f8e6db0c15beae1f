//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::EXPORT_ENTRY_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Shared by the binary and the CLI parsing tests. Convert into [`Config`]
/// before handing it to the library.
#[derive(Debug, Parser)]
#[command(
    name = "health_weight",
    version,
    about = "Extract body-weight measurements from a health-data export as CSV"
)]
pub struct Opt {
    /// Export archive (.zip) or export document (.xml)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write CSV to this file instead of standard output
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path of the export document inside the archive
    #[arg(long, value_name = "PATH", default_value = EXPORT_ENTRY_PATH)]
    pub archive_entry: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use health_weight::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("export.zip"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Export archive or export document to read
    pub input: PathBuf,

    /// CSV destination (stdout if None)
    pub output: Option<PathBuf>,

    /// Path of the export document inside an archive
    pub archive_entry: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("export.zip"),
            output: None,
            archive_entry: EXPORT_ENTRY_PATH.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.file,
            output: opt.output,
            archive_entry: opt.archive_entry,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
