//! Formatted output for fit results.

pub mod format;

pub use format::*;
