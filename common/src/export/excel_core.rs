//! Excel rendering (shared library)
//!
//! Sorted report: one sheet per category

use crate::categorize::CategoryTables;
use crate::error::{Error, Result};
use rust_xlsxwriter::*;

/// Header of every category sheet. No index column.
pub const REPORT_COLUMNS: [&str; 4] = ["Gender", "Style", "Color", "Total"];

fn excel_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// Render the categorized report into xlsx bytes.
///
/// Sheets come in the order Men, Women, Kids, Nano, Work; empty categories
/// still get a sheet with the header row.
pub fn generate_report_buffer(tables: &CategoryTables) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (category, rows) in tables.iter() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(category.sheet_name())
            .map_err(excel_err("sheet name"))?;

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *title, &header_format)
                .map_err(excel_err("header"))?;
        }

        for (i, group) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet
                .write_string(row, 0, &group.gender)
                .map_err(excel_err("Gender"))?;
            worksheet
                .write_string(row, 1, &group.style)
                .map_err(excel_err("Style"))?;
            worksheet
                .write_string(row, 2, &group.color)
                .map_err(excel_err("Color"))?;
            worksheet
                .write_number(row, 3, group.total)
                .map_err(excel_err("Total"))?;
        }
    }

    workbook.save_to_buffer().map_err(excel_err("save"))
}
