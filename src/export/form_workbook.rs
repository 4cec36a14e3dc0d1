//! Filled pages written over copies of the template workbook

use crate::error::{ListatronError, Result};
use crate::input::template::FormTemplate;
use listatron_common::{CellStyle, Error, FinishedPage};
use std::io::Cursor;
use umya_spreadsheet::{HorizontalAlignmentValues, Style, VerticalAlignmentValues};

/// Render one page into a standalone copy of the template.
///
/// Only the slot cells the page filled are touched; everything else in the
/// workbook is saved back as it was uploaded.
pub fn render_page(template: &FormTemplate<'_>, page: &FinishedPage) -> Result<Vec<u8>> {
    let mut workbook = template.pristine_copy()?;
    let sheet = workbook
        .get_sheet_collection_mut()
        .iter_mut()
        .find(|ws| ws.get_name() == template.sheet_name())
        .ok_or_else(|| Error::Schema(format!("template has no sheet '{}'", template.sheet_name())))?;

    for (cell, filled) in page.cells() {
        let address = cell.to_string();
        let target = sheet.get_cell_mut(address.as_str());
        target.set_value_string(filled.text.clone());
        apply_style(target.get_style_mut(), filled.style);
    }

    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&workbook, &mut buffer)
        .map_err(|e| ListatronError::Template(format!("page {}: {}", page.page, e)))?;
    Ok(buffer.into_inner())
}

/// Layer the slot profile over the cell's existing style (borders, fills
/// and number formats from the template stay).
fn apply_style(style: &mut Style, profile: CellStyle) {
    let font = style.get_font_mut();
    match profile {
        CellStyle::BoldCentered => font.set_bold(true),
        CellStyle::ItalicCentered => font.set_italic(true),
    };

    let alignment = style.get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Center);
}
