//! Export archives.
//!
//! An export archive is a zip file holding the export document at a fixed
//! path alongside attachments (ECGs, workout routes, ...) that are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error_handling::ExportError;

/// Extracts the entry named exactly `entry` from the zip archive at `path`.
///
/// Entry names are compared in full, so `export.xml` at another directory
/// level does not match. The archive handle is released on every return path.
///
/// # Errors
///
/// - [`ExportError::Open`] if the file can't be opened
/// - [`ExportError::Archive`] if it isn't a readable zip archive
/// - [`ExportError::EntryNotFound`] if no entry has the requested name
/// - [`ExportError::OpenEntry`] / [`ExportError::ReadEntry`] if the entry
///   can't be decompressed to the end
pub fn read_archive_entry(path: &Path, entry: &str) -> Result<Vec<u8>, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Open {
        what: "zipfile",
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| ExportError::Archive {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{} holds {} entries", path.display(), archive.len());

    let mut zipped = archive.by_name(entry).map_err(|source| match source {
        ZipError::FileNotFound => ExportError::EntryNotFound {
            path: path.to_path_buf(),
            entry: entry.to_string(),
        },
        source => ExportError::OpenEntry {
            path: path.to_path_buf(),
            entry: entry.to_string(),
            source,
        },
    })?;

    // Declared entry sizes are untrusted; the buffer grows as data arrives
    let mut data = Vec::new();
    zipped
        .read_to_end(&mut data)
        .map_err(|source| ExportError::ReadEntry {
            path: path.to_path_buf(),
            entry: entry.to_string(),
            source,
        })?;

    debug!(
        "Extracted {} ({} bytes) from {}",
        entry,
        data.len(),
        path.display()
    );
    Ok(data)
}
