use crate::error::Result;
use listatron_common::{Error, RawTable};

/// Read the inventory export. Headers are kept byte for byte; no trimming.
///
/// Short rows are accepted (missing cells read as empty); a row with more
/// fields than the header is a schema error.
pub fn read_export(bytes: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(Error::Schema(format!(
                "line {}: expected {} fields, saw {}",
                line,
                headers.len(),
                record.len()
            ))
            .into());
        }
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(RawTable::new(headers, rows))
}
