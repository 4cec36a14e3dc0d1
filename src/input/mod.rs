//! Upload readers
//!
//! - csv_export: inventory export (CSV)
//! - clients: reservation client list (xlsx)
//! - template: reservation form template (xlsx)

pub mod csv_export;
pub mod clients;
pub mod template;

use calamine::{Reader, Xlsx};
use listatron_common::Error;
use std::io::Cursor;

use crate::error::Result;

pub(crate) fn open_xlsx(bytes: &[u8]) -> Result<Xlsx<Cursor<&[u8]>>> {
    Ok(Xlsx::new(Cursor::new(bytes))?)
}

/// Check a sheet exists, listing the ones that do when it doesn't.
pub(crate) fn require_sheet(names: &[String], sheet: &str, what: &str) -> Result<()> {
    if names.iter().any(|n| n == sheet) {
        return Ok(());
    }
    Err(Error::Schema(format!(
        "{} has no sheet '{}' (found: {})",
        what,
        sheet,
        names.join(", ")
    ))
    .into())
}
