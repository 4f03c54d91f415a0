//! Report Module
//!
//! Serializes the final order list, one record per order.

pub mod writer;

pub use writer::{ReportError, ReportWriter, REPORT_HEADER};
