//! Configuration constants.
//!
//! Fixed identifiers of the health-data export format and the unit policy
//! applied to body-mass records.

/// Path of the export document inside an export archive.
pub const EXPORT_ENTRY_PATH: &str = "apple_health_export/export.xml";

/// Record type that marks a body-mass measurement.
pub const BODY_MASS_TYPE: &str = "HKQuantityTypeIdentifierBodyMass";

/// Unit identifier for kilograms.
pub const UNIT_KILOGRAMS: &str = "kg";

/// Unit identifier for pounds.
pub const UNIT_POUNDS: &str = "lb";

/// Conversion factor from kilograms to pounds.
pub const POUNDS_PER_KILOGRAM: f64 = 2.204623;

/// Header row of the CSV output.
pub const CSV_HEADER: [&str; 2] = ["Date", "Weight"];

/// File extension of export archives.
pub const ZIP_EXTENSION: &str = "zip";

/// File extension of raw export documents.
pub const XML_EXTENSION: &str = "xml";
