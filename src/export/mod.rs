pub mod archive;
pub mod form_workbook;

use crate::error::Result;
use crate::forms::FilledDocument;
use crate::sorting::sorted_workbook;
use listatron_common::SortedReport;
use std::path::{Path, PathBuf};

pub const SORTED_FILE_NAME: &str = "data_sorted.xlsx";
pub const ARCHIVE_FILE_NAME: &str = "all_forms.zip";

/// Which form artifacts to write
#[derive(Debug, Clone, Copy)]
pub struct FormsOutput {
    /// Individually named page files
    pub files: bool,
    /// `all_forms.zip` (only written when there is more than one page)
    pub archive: bool,
}

impl Default for FormsOutput {
    fn default() -> Self {
        Self {
            files: true,
            archive: true,
        }
    }
}

fn output_path_for(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write `data_sorted.xlsx` into `output` (a directory, or an explicit file path).
pub fn export_sorted(report: &SortedReport, output: &Path) -> Result<PathBuf> {
    let path = output_path_for(output, SORTED_FILE_NAME);
    let bytes = sorted_workbook(report)?;
    ensure_parent(&path)?;
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Write filled pages into `output_dir`. Returns the paths written.
///
/// A single page is always written as a file; several pages go to the zip
/// bundle and/or individual files depending on `options`.
pub fn export_forms(
    documents: &[FilledDocument],
    output_dir: &Path,
    options: FormsOutput,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if documents.is_empty() {
        return Ok(written);
    }

    std::fs::create_dir_all(output_dir)?;

    let multi_page = documents.len() > 1;
    if options.files || !multi_page || !options.archive {
        for document in documents {
            let path = output_dir.join(&document.file_name);
            std::fs::write(&path, &document.bytes)?;
            written.push(path);
        }
    }

    if multi_page && options.archive {
        let path = output_dir.join(ARCHIVE_FILE_NAME);
        std::fs::write(&path, archive::bundle(documents)?)?;
        written.push(path);
    }

    Ok(written)
}
