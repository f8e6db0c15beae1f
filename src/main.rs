//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `health_weight` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping failures to a diagnostic line and a non-zero exit status
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use health_weight::initialization::init_logger_with;
use health_weight::{run_export, Config, Opt};

/// Exit status for every failure, usage errors included.
const EXIT_FAILURE: i32 = 1;

fn main() {
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{e}");
            process::exit(0);
        }
        Err(e) => {
            // Help and usage errors both go to stderr and exit non-zero
            eprint!("{e}");
            process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = run(opt.into()) {
        eprintln!("health_weight error: {:#}", e);
        process::exit(EXIT_FAILURE);
    }
}

fn run(config: Config) -> Result<()> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    run_export(&config)?;
    Ok(())
}
