//! Read/write report JSON files.
//!
//! Report JSON is the "portable" representation of a generated Kundali:
//! identity fields, positions, ascendants, and every interpretation section.
//! `kundali chart --report <file>` re-renders the diamond chart from it
//! without recomputing (or re-geocoding) anything.
//!
//! The schema is defined by `domain::KundaliReport`.

use std::fs::File;
use std::path::Path;

use crate::domain::KundaliReport;
use crate::error::AppError;

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &KundaliReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::io(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<KundaliReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: KundaliReport =
        serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
