//! Application initialization.
//!
//! Only the logger needs process-wide setup; everything else in the pipeline
//! is created per run.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
