//! Input resolution.
//!
//! Turns the path given on the command line into the bytes of one export
//! document. Export archives (`.zip`) are searched for the export entry; any
//! other path is read as the document itself.

mod archive;
mod raw;

use std::path::Path;

use log::{debug, warn};

use crate::config::{XML_EXTENSION, ZIP_EXTENSION};
use crate::error_handling::ExportError;

pub use archive::read_archive_entry;
pub use raw::read_raw_document;

/// How an input path is read, decided from its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `.zip`: an export archive
    Zip,
    /// `.xml`: a raw export document
    Xml,
    /// Anything else, read as a raw export document
    Unrecognized,
}

impl InputKind {
    /// Classifies `path` by its trailing extension (case-sensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ZIP_EXTENSION) => InputKind::Zip,
            Some(XML_EXTENSION) => InputKind::Xml,
            _ => InputKind::Unrecognized,
        }
    }
}

/// Reads the export document behind `path`.
///
/// For archives, `entry` is the full path of the document inside the archive.
/// Paths that are neither `.zip` nor `.xml` are read as XML after a warning.
///
/// # Errors
///
/// Returns an I/O-kind [`ExportError`] if the file or archive can't be opened
/// or read, and [`ExportError::EntryNotFound`] if the archive has no `entry`.
pub fn read_export(path: &Path, entry: &str) -> Result<Vec<u8>, ExportError> {
    let kind = InputKind::from_path(path);
    debug!("Resolved {} as {:?}", path.display(), kind);

    match kind {
        InputKind::Zip => read_archive_entry(path, entry),
        InputKind::Xml => read_raw_document(path),
        InputKind::Unrecognized => {
            warn!(
                "Could not tell whether {} is an XML file or a zipfile. Assuming it's XML.",
                path.display()
            );
            read_raw_document(path)
        }
    }
}
