#![allow(dead_code)]

// Shared test helpers for building export fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

pub const BODY_MASS: &str = "HKQuantityTypeIdentifierBodyMass";
pub const EXPORT_ENTRY: &str = "apple_health_export/export.xml";

/// Builds one `<Record .../>` element.
pub fn record(kind: &str, unit: &str, date: &str, value: &str) -> String {
    format!(
        r#"  <Record type="{kind}" sourceName="Health" unit="{unit}" creationDate="{date}" startDate="{date}" endDate="{date}" value="{value}"/>"#
    )
}

/// Wraps records in an export document with the usual prologue and siblings.
pub fn export_document(records: &[String]) -> String {
    let mut doc = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE HealthData [
<!ELEMENT HealthData (ExportDate,Me,(Record|Correlation|Workout|ActivitySummary)*)>
<!ATTLIST HealthData locale CDATA #REQUIRED>
]>
<HealthData locale="en_US">
  <ExportDate value="2020-02-01 10:00:00 +0100"/>
  <Me HKCharacteristicTypeIdentifierDateOfBirth="" HKCharacteristicTypeIdentifierBiologicalSex="HKBiologicalSexNotSet"/>
"#,
    );
    for r in records {
        doc.push_str(r);
        doc.push('\n');
    }
    doc.push_str("</HealthData>\n");
    doc
}

/// The three-record document used by the end-to-end round-trip checks.
pub fn sample_document() -> String {
    export_document(&[
        record(BODY_MASS, "kg", "2020-01-01", "70"),
        record("HKQuantityTypeIdentifierStepCount", "kg", "2020-01-02", "5"),
        record(BODY_MASS, "lb", "2020-01-03", "150"),
    ])
}

/// Expected CSV for [`sample_document`].
pub const SAMPLE_CSV: &str = "Date,Weight\n2020-01-01,154.32361\n2020-01-03,150\n";

/// Writes `content` to `dir/name`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Writes a zip archive `dir/name` holding the given entries.
pub fn write_zip(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create zip file");
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (entry, content) in entries {
        zip.start_file(*entry, options)
            .expect("Failed to start zip entry");
        zip.write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip");
    path
}
