//! Record Loading Module
//!
//! Turns the comma-delimited record file into typed orders:
//! - `row`: raw rows as read from the file, with their line numbers
//! - `loader`: cleaning, header detection, whole-file validation and order construction

pub mod loader;
pub mod row;

pub use loader::{RecordError, RecordLoader};
pub use row::RawRow;
