//! Export document schema.

use serde::Deserialize;

/// Root element of an export document.
///
/// Only `Record` children are kept. Other children (`ExportDate`, `Me`,
/// `Workout`, `ActivitySummary`, ...) and stray text may appear anywhere,
/// including between and after records, and are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HealthDataElement")]
pub struct HealthExport {
    /// Records in document order
    pub records: Vec<Record>,
}

/// One measurement entry.
///
/// Attributes missing from the element decode to empty strings; any other
/// attribute or child element (`MetadataEntry`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// What is measured, e.g. `HKQuantityTypeIdentifierBodyMass`
    #[serde(rename = "@type", default)]
    pub kind: String,

    /// Unit of `value`, e.g. `kg` or `lb`
    #[serde(rename = "@unit", default)]
    pub unit: String,

    /// When the record was created, passed through as written
    #[serde(rename = "@creationDate", default)]
    pub timestamp: String,

    /// Measured quantity as written in the document
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// The root element as it appears on the wire: every child node in order.
#[derive(Deserialize)]
struct HealthDataElement {
    #[serde(rename = "$value", default)]
    children: Vec<Child>,
}

/// A child node of the root. Elements other than `Record` and text nodes
/// (`$text`) land in `Other` and are consumed without decoding.
#[derive(Deserialize)]
enum Child {
    Record(Record),
    #[serde(other)]
    Other,
}

impl From<HealthDataElement> for HealthExport {
    fn from(root: HealthDataElement) -> Self {
        let records = root
            .children
            .into_iter()
            .filter_map(|child| match child {
                Child::Record(record) => Some(record),
                Child::Other => None,
            })
            .collect();
        HealthExport { records }
    }
}
