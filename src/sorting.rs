//! Inventory export sorting
//!
//! CSV bytes → categorized report → `data_sorted.xlsx` bytes

use crate::error::Result;
use crate::input::csv_export::read_export;
use listatron_common::export::excel_core::generate_report_buffer;
use listatron_common::{sort_inventory, SortedReport};
use tracing::{debug, info};

/// Run the whole correction and categorization pipeline on an upload.
///
/// All or nothing: a malformed file or a missing column yields one error and
/// no tables.
pub fn sort_export(bytes: &[u8]) -> Result<SortedReport> {
    let table = read_export(bytes)?;
    debug!(rows = table.rows.len(), "export read");

    let report = sort_inventory(&table)?;
    if report.dropped_rows > 0 {
        debug!(dropped = report.dropped_rows, "rows without a numeric quantity dropped");
    }
    info!(
        kept = report.kept_rows,
        total_qty = report.total_qty,
        "export sorted"
    );

    Ok(report)
}

/// Workbook with one sheet per category.
pub fn sorted_workbook(report: &SortedReport) -> Result<Vec<u8>> {
    Ok(generate_report_buffer(&report.tables)?)
}
