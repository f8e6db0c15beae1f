//! Application configuration and constants.
//!
//! This module provides:
//! - Export format identifiers and the unit conversion constant
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
