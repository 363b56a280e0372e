//! Input/output helpers.
//!
//! - report JSON read/write (`report_file`)

pub mod report_file;

pub use report_file::*;
