//! Inventory export → categorized report

use crate::aggregate::aggregate;
use crate::categorize::CategoryTables;
use crate::error::Result;
use crate::remap::{ColumnMap, RawTable};
use crate::types::CorrectedRecord;

/// Output of one sorting run
#[derive(Debug, Clone, PartialEq)]
pub struct SortedReport {
    pub tables: CategoryTables,
    /// Sum of Qty over every row that survived cleaning, categorized or not
    pub total_qty: f64,
    pub kept_rows: usize,
    pub dropped_rows: usize,
}

/// Remap, clean, aggregate and categorize an export table.
///
/// Fails only when a required column is missing; rows with a non-numeric
/// quantity are dropped and only show up in `dropped_rows`.
pub fn sort_inventory(table: &RawTable) -> Result<SortedReport> {
    let columns = ColumnMap::resolve(&table.headers)?;

    let records: Vec<CorrectedRecord> = table
        .rows
        .iter()
        .filter_map(|row| columns.remap(row).clean())
        .collect();

    let dropped_rows = table.rows.len() - records.len();
    let total_qty = records.iter().fold(0.0, |acc, r| acc + r.qty);
    let tables = CategoryTables::partition(aggregate(&records));

    Ok(SortedReport {
        tables,
        total_qty,
        kept_rows: records.len(),
        dropped_rows,
    })
}
