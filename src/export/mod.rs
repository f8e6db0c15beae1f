//! CSV export of the weight series.
//!
//! This module provides the row writer and the destinations it can write to
//! (stdout, a file, or an in-memory buffer).

mod csv;
mod destination;

pub use csv::WeightCsvWriter;
pub use destination::{Destination, StdoutDestination};
