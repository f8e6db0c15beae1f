//! Raw export documents.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error_handling::ExportError;

/// Reads the whole file at `path`.
///
/// The file handle is closed when this function returns, on success or error.
pub fn read_raw_document(path: &Path) -> Result<Vec<u8>, ExportError> {
    let mut file = File::open(path).map_err(|source| ExportError::Open {
        what: "XML file",
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|source| ExportError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}
