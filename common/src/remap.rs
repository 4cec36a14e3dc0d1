//! Column remapping for the inventory export
//!
//! The export's header labels are shifted by one position: the column named
//! `Gender` holds the division, `Division` holds the style, and so on, while
//! `Load#` holds the real gender and ` "EU Size"` the quantity. The shift is
//! fixed, so it lives in a table instead of being guessed per file.

use crate::error::{Error, Result};
use crate::types::CorrectedRecord;

/// True meaning of an export column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Gender,
    Division,
    Style,
    Color,
    Size,
    Qty,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Gender,
        Field::Division,
        Field::Style,
        Field::Color,
        Field::Size,
        Field::Qty,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Declared header label → true field. Labels must match byte for byte,
/// including the leading space and quotes of ` "EU Size"`.
pub const SHIFT_TABLE: &[(&str, Field)] = &[
    ("Load#", Field::Gender),
    ("Gender", Field::Division),
    ("Division", Field::Style),
    ("Style", Field::Color),
    ("Color", Field::Size),
    (" \"EU Size\"", Field::Qty),
];

/// Uploaded export as plain text cells
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

/// Position of each true field inside a raw row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [usize; 6],
}

impl ColumnMap {
    /// Locate every declared label in the header row.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut positions = [0usize; 6];
        let mut missing = Vec::new();

        for (label, field) in SHIFT_TABLE {
            match headers.iter().position(|h| h.as_ref() == *label) {
                Some(pos) => positions[field.index()] = pos,
                None => missing.push(*label),
            }
        }

        if !missing.is_empty() {
            return Err(Error::Schema(format!(
                "missing column(s): {}",
                missing
                    .iter()
                    .map(|l| format!("'{}'", l))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(Self { positions })
    }

    /// Column position holding the given true field
    pub fn position(&self, field: Field) -> usize {
        self.positions[field.index()]
    }

    /// Rename one raw row. Cells past the end of a short row read as empty.
    pub fn remap<S: AsRef<str>>(&self, row: &[S]) -> RemappedRecord {
        let cell = |field: Field| {
            row.get(self.position(field))
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default()
        };

        RemappedRecord {
            gender: cell(Field::Gender),
            division: cell(Field::Division),
            style: cell(Field::Style),
            color: cell(Field::Color),
            size: cell(Field::Size),
            qty: cell(Field::Qty),
        }
    }
}

/// Row after renaming, before cleaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappedRecord {
    pub gender: String,
    pub division: String,
    pub style: String,
    pub color: String,
    pub size: String,
    pub qty: String,
}

impl RemappedRecord {
    /// Trim text fields and coerce Qty. `None` means the row is dropped.
    pub fn clean(self) -> Option<CorrectedRecord> {
        let qty = parse_qty(&self.qty)?;

        Some(CorrectedRecord {
            gender: present(&self.gender),
            division: self.division.trim().to_string(),
            style: self.style.trim().to_string(),
            color: present(&self.color),
            size: self.size.trim().to_string(),
            qty,
        })
    }
}

/// Trimmed text, or `None` for an empty cell. Whitespace-only is not empty.
fn present(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.trim().to_string())
}

fn parse_qty(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|q| !q.is_nan())
}
