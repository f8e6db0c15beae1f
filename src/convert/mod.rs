//! Body-mass filtering and unit normalization.
//!
//! Selects body-mass records and expresses each one in pounds:
//! - `lb` values pass through verbatim, never parsed or reformatted
//! - `kg` values are parsed, multiplied by [`POUNDS_PER_KILOGRAM`], and
//!   written in the shortest form that parses back to the same `f64`
//! - any other unit stops the run with [`ExportError::UnsupportedUnit`]

mod unit;

pub use unit::MassUnit;

use crate::config::{BODY_MASS_TYPE, POUNDS_PER_KILOGRAM};
use crate::error_handling::ExportError;
use crate::parse::Record;

/// One CSV data row: when the weight was recorded and the weight in pounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightRow<'a> {
    /// Record timestamp, unmodified
    pub timestamp: &'a str,
    /// Weight in pounds as a decimal string
    pub pounds: String,
}

/// Returns true if `record` is a body-mass measurement.
pub fn is_body_mass(record: &Record) -> bool {
    record.kind == BODY_MASS_TYPE
}

/// Expresses the value of a body-mass record in pounds.
///
/// # Errors
///
/// - [`ExportError::Conversion`] if a `kg` value isn't a decimal number
/// - [`ExportError::NonFinite`] if a `kg` value is infinite or NaN, or
///   overflows once converted
/// - [`ExportError::UnsupportedUnit`] if the unit is neither `kg` nor `lb`
pub fn to_pounds(record: &Record) -> Result<String, ExportError> {
    match MassUnit::parse(&record.unit) {
        Some(MassUnit::Pounds) => Ok(record.value.clone()),
        Some(MassUnit::Kilograms) => {
            let kg: f64 = record
                .value
                .parse()
                .map_err(|source| ExportError::Conversion {
                    value: record.value.clone(),
                    source,
                })?;
            let pounds = kg * POUNDS_PER_KILOGRAM;
            if !pounds.is_finite() {
                return Err(ExportError::NonFinite {
                    value: record.value.clone(),
                });
            }
            Ok(format_pounds(pounds))
        }
        None => Err(ExportError::UnsupportedUnit {
            unit: record.unit.clone(),
        }),
    }
}

/// Formats a weight with the shortest round-trip representation.
///
/// `f64`'s `Display` never switches to exponent notation and never pads,
/// so `150.0` becomes `150` and `154.32361` stays as is.
pub fn format_pounds(pounds: f64) -> String {
    pounds.to_string()
}

/// Lazily converts the body-mass records in `records`, in document order.
///
/// Other records are skipped without looking at their values. The iterator
/// yields an error in place of the first row that can't be converted; callers
/// are expected to stop there.
pub fn weight_rows(
    records: &[Record],
) -> impl Iterator<Item = Result<WeightRow<'_>, ExportError>> + '_ {
    records
        .iter()
        .filter(|r| is_body_mass(r))
        .map(weight_row)
}

fn weight_row(record: &Record) -> Result<WeightRow<'_>, ExportError> {
    Ok(WeightRow {
        timestamp: &record.timestamp,
        pounds: to_pounds(record)?,
    })
}
