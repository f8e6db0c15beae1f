//! CSV emission.
//!
//! Writes the `Date,Weight` series with standard CSV quoting: fields holding
//! the delimiter, a quote, or a line break are quoted and embedded quotes are
//! doubled.

use std::io::Write;

use csv::Writer;

use crate::config::CSV_HEADER;
use crate::convert::WeightRow;
use crate::error_handling::ExportError;

/// Row-by-row writer for the weight series.
///
/// The header is written on construction. Rows handed to the writer before a
/// failure are flushed to the underlying writer when it is dropped, so output
/// emitted before a fatal error is not lost.
pub struct WeightCsvWriter<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl<W: Write> WeightCsvWriter<W> {
    /// Creates the writer and writes the header row.
    pub fn new(output: W) -> Result<Self, ExportError> {
        let mut writer = Writer::from_writer(output);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Writes one data row.
    pub fn write_row(&mut self, row: &WeightRow<'_>) -> Result<(), ExportError> {
        self.writer
            .write_record([row.timestamp, row.pounds.as_str()])?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes all buffered output and returns the number of data rows.
    pub fn finish(mut self) -> Result<usize, ExportError> {
        self.writer.flush().map_err(ExportError::Flush)?;
        Ok(self.rows)
    }
}
