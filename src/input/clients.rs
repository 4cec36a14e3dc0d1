use super::{open_xlsx, require_sheet};
use crate::error::{ListatronError, Result};
use calamine::{Data, DataType, Reader};
use chrono::NaiveDate;
use listatron_common::{ClientRecord, Error};

pub const NAME: &str = "NAME";
pub const LAST_NAME: &str = "LAST NAME";
pub const NUMBER: &str = "NUMBER";
pub const REF: &str = "REF";
pub const COLOR: &str = "COLOR";
pub const SIZE: &str = "SIZE";
pub const WORKER: &str = "WORKER";
pub const DATE: &str = "DATE";

/// Columns every client row must fill
pub const REQUIRED_COLUMNS: [&str; 7] = [NAME, NUMBER, REF, COLOR, SIZE, WORKER, DATE];

/// Column positions in the header row
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClientColumns {
    required: [usize; 7],
    last_name: Option<usize>,
}

impl ClientColumns {
    fn resolve(header: &[Data]) -> Result<Self> {
        let find = |label: &str| {
            header
                .iter()
                .position(|cell| cell_text(cell).as_deref() == Some(label))
        };

        let mut required = [0usize; 7];
        let mut missing = Vec::new();
        for (slot, label) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            match find(label) {
                Some(pos) => *slot = pos,
                None => missing.push(label),
            }
        }

        if !missing.is_empty() {
            return Err(Error::Schema(format!(
                "client list missing column(s): {}",
                missing.join(", ")
            ))
            .into());
        }

        Ok(Self {
            required,
            last_name: find(LAST_NAME),
        })
    }
}

/// Read the client list. A blank required cell fails the whole list.
pub fn read_clients(bytes: &[u8], sheet: Option<&str>) -> Result<Vec<ClientRecord>> {
    let mut workbook = open_xlsx(bytes)?;
    let names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => {
            require_sheet(&names, name, "client list")?;
            name.to_string()
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| Error::Schema("client list has no sheets".into()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

    let (header_index, columns) = locate_header(range.rows())?
        .ok_or_else(|| Error::Schema(format!("sheet '{}' is empty", sheet_name)))?;

    let mut clients = Vec::new();
    for (offset, row) in range.rows().skip(header_index + 1).enumerate() {
        if is_blank(row) {
            continue;
        }
        // 1-based sheet row, after the header
        let row_number = first_row + header_index + offset + 2;
        clients.push(parse_client(row, &columns, row_number)?);
    }

    Ok(clients)
}

/// First row that carries every required label, with its index.
///
/// Title rows above the header are skipped. When no row qualifies, the
/// missing columns are reported against the first non-blank row; `None`
/// means the sheet has no content at all.
fn locate_header<'a>(
    rows: impl Iterator<Item = &'a [Data]>,
) -> Result<Option<(usize, ClientColumns)>> {
    let mut first_error = None;

    for (index, row) in rows.enumerate() {
        if is_blank(row) {
            continue;
        }
        match ClientColumns::resolve(row) {
            Ok(columns) => return Ok(Some((index, columns))),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(None),
    }
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| cell_text(cell).is_none())
}

fn parse_client(row: &[Data], columns: &ClientColumns, row_number: usize) -> Result<ClientRecord> {
    let field = |i: usize| -> Result<String> {
        row.get(columns.required[i])
            .and_then(cell_text)
            .ok_or_else(|| {
                ListatronError::from(Error::InvalidValue {
                    row: row_number,
                    field: REQUIRED_COLUMNS[i].to_string(),
                    reason: "empty cell".into(),
                })
            })
    };

    let last_name = columns
        .last_name
        .and_then(|pos| row.get(pos))
        .and_then(cell_text);

    Ok(ClientRecord {
        name: field(0)?,
        last_name,
        number: field(1)?,
        reference: field(2)?,
        color: field(3)?,
        size: field(4)?,
        worker: field(5)?,
        date: field(6)?,
    })
}

/// Cell as display text; `None` for blank cells.
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => format_date(cell.as_date()?),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Reservation dates as written on the paper forms
fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Whole numbers without the trailing ".0" (phone numbers, sizes)
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
