//! Zip bundle of filled form pages

use crate::error::Result;
use crate::forms::FilledDocument;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle every page into one zip, entries in page order.
pub fn bundle(documents: &[FilledDocument]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for document in documents {
        writer.start_file(document.file_name.as_str(), options)?;
        writer.write_all(&document.bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
