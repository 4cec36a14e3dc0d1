use super::require_sheet;
use crate::error::{ListatronError, Result};
use std::io::Cursor;
use umya_spreadsheet::Spreadsheet;

/// Uploaded template workbook with its form sheet checked.
///
/// Pages never share a workbook: each one is rendered over its own
/// `pristine_copy`, parsed again from the original bytes.
#[derive(Debug, Clone)]
pub struct FormTemplate<'a> {
    bytes: &'a [u8],
    sheet: String,
}

impl FormTemplate<'_> {
    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    /// Full template workbook as uploaded: every sheet, merge, style and width.
    pub fn pristine_copy(&self) -> Result<Spreadsheet> {
        read_workbook(self.bytes)
    }
}

/// Open the template and check it has the form sheet.
pub fn load_template<'a>(bytes: &'a [u8], sheet: &str) -> Result<FormTemplate<'a>> {
    let workbook = read_workbook(bytes)?;
    let names: Vec<String> = workbook
        .get_sheet_collection()
        .iter()
        .map(|ws| ws.get_name().to_string())
        .collect();
    require_sheet(&names, sheet, "template")?;

    Ok(FormTemplate {
        bytes,
        sheet: sheet.to_string(),
    })
}

fn read_workbook(bytes: &[u8]) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
        .map_err(|e| ListatronError::Template(e.to_string()))
}
