//! Error type definitions.
//!
//! This module defines all error types used throughout the export pipeline.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised by the export pipeline.
///
/// Every variant is fatal for the run. Use [`ExportError::kind`] to get the
/// coarse category when the exact variant doesn't matter.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The input path could not be opened.
    #[error("Couldn't open {what} named {}", .path.display())]
    Open {
        /// What the path was expected to be ("zipfile" or "XML file")
        what: &'static str,
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The raw export document could not be read to the end.
    #[error("Couldn't read all of file named {}", .path.display())]
    ReadFile {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The archive is not a readable zip file.
    #[error("Couldn't read zipfile named {}", .path.display())]
    Archive {
        /// Archive path
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry could not be opened.
    #[error("Couldn't open {entry} inside {}", .path.display())]
    OpenEntry {
        /// Archive path
        path: PathBuf,
        /// Entry name inside the archive
        entry: String,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry could not be read to the end.
    #[error("Couldn't read all of {entry} inside {}", .path.display())]
    ReadEntry {
        /// Archive path
        path: PathBuf,
        /// Entry name inside the archive
        entry: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The archive has no entry with the expected name.
    #[error("Couldn't find {entry} inside {}", .path.display())]
    EntryNotFound {
        /// Archive path
        path: PathBuf,
        /// Entry name that was looked up
        entry: String,
    },

    /// The export document is not well-formed.
    #[error("Couldn't unmarshal health data")]
    Parse(#[from] quick_xml::de::DeError),

    /// A body-mass value is not a decimal number.
    #[error("Couldn't parse mass in kilograms: {value:?}")]
    Conversion {
        /// Offending value
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseFloatError,
    },

    /// A body-mass value is, or converts to, an infinity or NaN.
    #[error("Couldn't convert mass in kilograms to a finite weight: {value:?}")]
    NonFinite {
        /// Offending value
        value: String,
    },

    /// A body-mass record uses a unit that can't be converted to pounds.
    #[error("Couldn't figure out how to convert \u{201c}{unit}\u{201d} to lb (pounds)")]
    UnsupportedUnit {
        /// Unit identifier found on the record
        unit: String,
    },

    /// The output file could not be created.
    #[error("Couldn't create output file {}", .path.display())]
    CreateOutput {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A CSV row could not be written.
    #[error("Couldn't write line")]
    Write(#[from] csv::Error),

    /// Buffered CSV output could not be flushed.
    #[error("Couldn't flush output")]
    Flush(#[source] io::Error),

    /// The output destination could not be synced to storage.
    #[error("Couldn't sync output")]
    Sync(#[source] io::Error),
}

/// Coarse error categories of the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Input could not be opened or read
    Io,
    /// The archive lacks the export document
    EntryNotFound,
    /// Malformed export document
    Parse,
    /// Unparseable value on a body-mass record
    Conversion,
    /// Unknown unit on a body-mass record
    UnsupportedUnit,
    /// Output could not be written, flushed, or synced
    Write,
}

impl ErrorKind {
    /// Human-readable category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "I/O error",
            ErrorKind::EntryNotFound => "Entry not found",
            ErrorKind::Parse => "Parse error",
            ErrorKind::Conversion => "Conversion error",
            ErrorKind::UnsupportedUnit => "Unsupported unit",
            ErrorKind::Write => "Write error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExportError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Open { .. }
            | ExportError::ReadFile { .. }
            | ExportError::Archive { .. }
            | ExportError::OpenEntry { .. }
            | ExportError::ReadEntry { .. } => ErrorKind::Io,
            ExportError::EntryNotFound { .. } => ErrorKind::EntryNotFound,
            ExportError::Parse(_) => ErrorKind::Parse,
            ExportError::Conversion { .. } | ExportError::NonFinite { .. } => {
                ErrorKind::Conversion
            }
            ExportError::UnsupportedUnit { .. } => ErrorKind::UnsupportedUnit,
            ExportError::CreateOutput { .. }
            | ExportError::Write(_)
            | ExportError::Flush(_)
            | ExportError::Sync(_) => ErrorKind::Write,
        }
    }
}
