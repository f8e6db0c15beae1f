//! Export document parsing.
//!
//! Decodes export XML into [`HealthExport`] with a declarative serde mapping.
//! Decoding is lenient about content it doesn't know but strict about markup:
//! a document that isn't well-formed is rejected as a whole.

mod models;

pub use models::{HealthExport, Record};

use crate::error_handling::ExportError;

/// Decodes an export document.
///
/// # Errors
///
/// Returns [`ExportError::Parse`] if `data` is not a well-formed document.
pub fn parse_health_data(data: &[u8]) -> Result<HealthExport, ExportError> {
    let export: HealthExport = quick_xml::de::from_reader(data)?;
    log::debug!("Decoded {} records", export.records.len());
    Ok(export)
}
