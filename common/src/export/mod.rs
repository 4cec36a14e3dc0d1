//! Workbook renderers shared by the CLI

#[cfg(feature = "excel")]
pub mod excel_core;
