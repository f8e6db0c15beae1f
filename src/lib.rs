//! health_weight library: body-weight series from a health-data export
//!
//! Reads an export archive (`.zip`) or export document (`.xml`), keeps the
//! body-mass records, expresses them in pounds, and writes them as a
//! `Date,Weight` CSV series.
//!
//! # Example
//!
//! ```no_run
//! use health_weight::{export_weights, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("export.zip"),
//!     ..Default::default()
//! };
//!
//! let mut csv: Vec<u8> = Vec::new();
//! let report = export_weights(&config, &mut csv)?;
//! println!("{} weight rows out of {} records", report.rows_written, report.records_scanned);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
pub mod parse;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ErrorKind, ExportError};
pub use run::{export_weights, run_export, ExportReport};

// Internal run module (drives the pipeline end to end)
mod run {
    use std::fs::File;

    use log::{debug, info};

    use crate::config::Config;
    use crate::convert::weight_rows;
    use crate::error_handling::ExportError;
    use crate::export::{Destination, StdoutDestination, WeightCsvWriter};
    use crate::input::read_export;
    use crate::parse::parse_health_data;

    /// Results of an export run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ExportReport {
        /// Records found in the export document
        pub records_scanned: usize,
        /// Data rows written (header excluded)
        pub rows_written: usize,
    }

    /// Runs the export described by `config`.
    ///
    /// Writes to `config.output` if set (the file is created or truncated),
    /// otherwise to standard output.
    ///
    /// # Errors
    ///
    /// Any [`ExportError`]; each one ends the run.
    pub fn run_export(config: &Config) -> Result<ExportReport, ExportError> {
        match &config.output {
            Some(path) => {
                let mut file = File::create(path).map_err(|source| ExportError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                export_weights(config, &mut file)
            }
            None => export_weights(config, &mut StdoutDestination::new()),
        }
    }

    /// Reads `config.input` and writes the weight series to `dest`.
    ///
    /// Nothing is written unless the document decodes. After that, rows are
    /// written one at a time in document order; if a row fails to convert,
    /// the rows before it stay in `dest` and the error is returned. On success
    /// the output is flushed and `dest` is synced.
    ///
    /// # Errors
    ///
    /// - I/O-kind errors and [`ExportError::EntryNotFound`] from reading input
    /// - [`ExportError::Parse`] for a malformed document
    /// - [`ExportError::Conversion`] / [`ExportError::UnsupportedUnit`] for a
    ///   body-mass record that can't be expressed in pounds
    /// - write-kind errors from emitting, flushing, or syncing
    pub fn export_weights<D: Destination>(
        config: &Config,
        dest: &mut D,
    ) -> Result<ExportReport, ExportError> {
        let data = read_export(&config.input, &config.archive_entry)?;
        let export = parse_health_data(&data)?;
        drop(data);

        let mut writer = WeightCsvWriter::new(&mut *dest)?;
        for row in weight_rows(&export.records) {
            writer.write_row(&row?)?;
        }
        let rows_written = writer.finish()?;
        dest.sync().map_err(ExportError::Sync)?;

        debug!(
            "Scanned {} records from {}",
            export.records.len(),
            config.input.display()
        );
        info!("Wrote {} weight rows", rows_written);

        Ok(ExportReport {
            records_scanned: export.records.len(),
            rows_written,
        })
    }
}
