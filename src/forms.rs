//! Reservation form filling
//!
//! Client list + template → one standalone workbook per ten clients

use crate::config::Config;
use crate::error::Result;
use crate::export::form_workbook::render_page;
use crate::input::{clients::read_clients, template::load_template};
use listatron_common::fill_pages;
use tracing::{debug, info};

/// One rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct FilledDocument {
    /// 1-based
    pub page: usize,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `filled.xlsx` for a single page, `filled_<n>.xlsx` otherwise
pub fn document_name(page: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        "filled.xlsx".to_string()
    } else {
        format!("filled_{}.xlsx", page)
    }
}

/// Fill the template with every client, ten per page.
///
/// Each page is a copy of the whole template workbook with its slots
/// filled in. Any failure (missing sheet, missing column, blank required
/// cell) aborts the run before a single document is returned.
pub fn fill_forms(
    clients_bytes: &[u8],
    template_bytes: &[u8],
    config: &Config,
) -> Result<Vec<FilledDocument>> {
    let layout = config.form_layout()?;
    let clients = read_clients(clients_bytes, config.client_sheet.as_deref())?;
    let template = load_template(template_bytes, &config.template_sheet)?;
    debug!(
        clients = clients.len(),
        sheet = template.sheet_name(),
        "inputs loaded"
    );

    let pages = fill_pages(&clients, &layout)?;
    let total_pages = pages.len();

    let mut documents = Vec::with_capacity(total_pages);
    for page in &pages {
        let bytes = render_page(&template, page)?;
        debug!(page = page.page, slots = page.slots_used(), "page rendered");
        documents.push(FilledDocument {
            page: page.page,
            file_name: document_name(page.page, total_pages),
            bytes,
        });
    }

    info!(clients = clients.len(), pages = total_pages, "forms filled");
    Ok(documents)
}
