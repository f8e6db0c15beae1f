//! Error handling.
//!
//! This module provides the error types of the export pipeline and of
//! application initialization. Every [`ExportError`] is fatal; the binary
//! prints it once and exits non-zero.

mod types;

// Re-export public API
pub use types::{ErrorKind, ExportError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;
    use std::path::PathBuf;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_strings_are_unique() {
        let names: HashSet<&str> = ErrorKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ErrorKind::iter().count());
    }

    #[test]
    fn test_io_variants_map_to_io_kind() {
        let err = ExportError::Open {
            what: "XML file",
            path: PathBuf::from("missing.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(
            err.to_string(),
            "Couldn't open XML file named missing.xml"
        );

        let err = ExportError::ReadEntry {
            path: PathBuf::from("export.zip"),
            entry: "apple_health_export/export.xml".to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_unsupported_unit_message_names_unit() {
        let err = ExportError::UnsupportedUnit {
            unit: "st".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedUnit);
        assert!(err.to_string().contains("st"));
        assert!(err.to_string().contains("lb (pounds)"));
    }

    #[test]
    fn test_conversion_error_keeps_source() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ExportError::Conversion {
            value: "abc".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_non_finite_is_a_conversion_error() {
        let err = ExportError::NonFinite {
            value: "NaN".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert!(err.to_string().contains("\"NaN\""));
    }

    #[test]
    fn test_write_variants_map_to_write_kind() {
        let err = ExportError::Flush(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.kind(), ErrorKind::Write);
        let err = ExportError::Sync(io::Error::new(io::ErrorKind::Other, "eio"));
        assert_eq!(err.kind(), ErrorKind::Write);
    }

    #[test]
    fn test_entry_not_found_is_its_own_kind() {
        let err = ExportError::EntryNotFound {
            path: PathBuf::from("export.zip"),
            entry: "apple_health_export/export.xml".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::EntryNotFound);
        assert_eq!(
            err.to_string(),
            "Couldn't find apple_health_export/export.xml inside export.zip"
        );
    }
}
