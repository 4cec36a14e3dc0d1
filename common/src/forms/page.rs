//! Page filling
//!
//! A page is the set of slot cells written over one copy of the template.
//! The template itself never enters the core; whoever renders a page starts
//! from a fresh copy and applies `FinishedPage::cells` on top of it.

use super::layout::{CellRef, FormLayout, SLOTS_PER_PAGE};
use crate::error::{Error, Result};
use crate::types::ClientRecord;
use std::collections::BTreeMap;

/// Cosmetic profile applied to filled cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// name, number, worker
    BoldCentered,
    /// observation, date
    ItalicCentered,
}

/// Text written into a slot cell
#[derive(Debug, Clone, PartialEq)]
pub struct FilledCell {
    pub text: String,
    pub style: CellStyle,
}

/// One template page being filled
#[derive(Debug, Clone)]
pub struct FormPage<'a> {
    layout: &'a FormLayout,
    filled: BTreeMap<CellRef, FilledCell>,
    slots_used: usize,
}

impl<'a> FormPage<'a> {
    /// Start an empty page over the given slot layout.
    pub fn new(layout: &'a FormLayout) -> Self {
        Self {
            layout,
            filled: BTreeMap::new(),
            slots_used: 0,
        }
    }

    /// Write one client into a 1-based slot.
    pub fn fill_slot(&mut self, slot: usize, client: &ClientRecord) -> Result<()> {
        let cells = *self
            .layout
            .slot(slot)
            .ok_or_else(|| Error::Layout(format!("slot {} out of range 1-{}", slot, SLOTS_PER_PAGE)))?;

        let entries = [
            (cells.name, client.full_name(), CellStyle::BoldCentered),
            (cells.number, client.number.clone(), CellStyle::BoldCentered),
            (cells.observation, client.observation(), CellStyle::ItalicCentered),
            (cells.worker, client.worker.clone(), CellStyle::BoldCentered),
            (cells.date, client.date_line(), CellStyle::ItalicCentered),
        ];
        for (cell, text, style) in entries {
            self.filled.insert(cell, FilledCell { text, style });
        }

        self.slots_used = self.slots_used.max(slot);
        Ok(())
    }

    /// Freeze the page.
    pub fn finish(self, page: usize) -> FinishedPage {
        FinishedPage {
            page,
            filled: self.filled,
            slots_used: self.slots_used,
        }
    }
}

/// Completed page, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedPage {
    /// 1-based page number
    pub page: usize,
    filled: BTreeMap<CellRef, FilledCell>,
    slots_used: usize,
}

impl FinishedPage {
    pub fn slots_used(&self) -> usize {
        self.slots_used
    }

    /// Filled text at a cell, if a slot wrote there
    pub fn filled_text(&self, cell: CellRef) -> Option<&str> {
        self.filled.get(&cell).map(|c| c.text.as_str())
    }

    /// Cells to write over the template, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &FilledCell)> {
        self.filled.iter().map(|(cell, value)| (*cell, value))
    }
}

/// ceil(clients / 10)
pub fn page_count(clients: usize) -> usize {
    clients.div_ceil(SLOTS_PER_PAGE)
}

/// Consecutive runs of at most ten clients, in list order
pub fn paginate(clients: &[ClientRecord]) -> Vec<&[ClientRecord]> {
    clients.chunks(SLOTS_PER_PAGE).collect()
}

/// Fill one page per ten clients. Slots past the last client are not
/// written, so they keep whatever the template holds.
pub fn fill_pages(clients: &[ClientRecord], layout: &FormLayout) -> Result<Vec<FinishedPage>> {
    paginate(clients)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut page = FormPage::new(layout);
            for (i, client) in chunk.iter().enumerate() {
                page.fill_slot(i + 1, client)?;
            }
            Ok(page.finish(index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(i: usize) -> ClientRecord {
        ClientRecord {
            name: format!("Cliente{}", i),
            last_name: None,
            number: format!("{}", 8000 + i),
            reference: format!("REF{}", i),
            color: "BLACK".into(),
            size: "40".into(),
            worker: "Luis".into(),
            date: "01/02/2025".into(),
        }
    }

    fn clients(n: usize) -> Vec<ClientRecord> {
        (1..=n).map(client).collect()
    }

    #[test]
    fn test_page_count() {
        for (n, expected) in [(0, 0), (1, 1), (10, 1), (11, 2), (20, 2), (21, 3)] {
            assert_eq!(page_count(n), expected, "n={}", n);
        }
    }

    #[test]
    fn test_paginate_keeps_order() {
        for n in [0, 1, 10, 11, 20, 21] {
            let list = clients(n);
            let pages = paginate(&list);
            assert_eq!(pages.len(), page_count(n));
            let flattened: Vec<_> = pages.iter().flat_map(|p| p.iter()).cloned().collect();
            assert_eq!(flattened, list);
            assert!(pages.iter().all(|p| p.len() <= SLOTS_PER_PAGE));
        }
    }

    #[test]
    fn test_fill_slot_writes_five_cells() {
        let layout = FormLayout::default();
        let mut page = FormPage::new(&layout);
        let mut c = client(1);
        c.last_name = Some("Perez".into());
        page.fill_slot(1, &c).unwrap();
        let page = page.finish(1);

        let slot = layout.slot(1).unwrap();
        assert_eq!(page.filled_text(slot.name), Some("Cliente1 Perez"));
        assert_eq!(page.filled_text(slot.number), Some("8001"));
        assert_eq!(page.filled_text(slot.observation), Some("REF1 BLACK 40"));
        assert_eq!(page.filled_text(slot.worker), Some("Luis"));
        assert_eq!(page.filled_text(slot.date), Some("Fecha: 01/02/2025"));
        assert_eq!(page.slots_used(), 1);
    }

    #[test]
    fn test_fill_slot_styles() {
        let layout = FormLayout::default();
        let mut page = FormPage::new(&layout);
        page.fill_slot(3, &client(3)).unwrap();
        let page = page.finish(1);
        let slot = layout.slot(3).unwrap();

        let style_of = |cell: CellRef| page.cells().find(|(c, _)| *c == cell).map(|(_, f)| f.style);
        assert_eq!(style_of(slot.name), Some(CellStyle::BoldCentered));
        assert_eq!(style_of(slot.number), Some(CellStyle::BoldCentered));
        assert_eq!(style_of(slot.worker), Some(CellStyle::BoldCentered));
        assert_eq!(style_of(slot.observation), Some(CellStyle::ItalicCentered));
        assert_eq!(style_of(slot.date), Some(CellStyle::ItalicCentered));
    }

    #[test]
    fn test_fill_slot_out_of_range() {
        let layout = FormLayout::default();
        let mut page = FormPage::new(&layout);
        assert!(page.fill_slot(0, &client(1)).is_err());
        assert!(page.fill_slot(11, &client(1)).is_err());
    }

    #[test]
    fn test_refilled_slot_keeps_one_entry_per_cell() {
        let layout = FormLayout::default();
        let mut page = FormPage::new(&layout);
        page.fill_slot(1, &client(1)).unwrap();
        page.fill_slot(1, &client(2)).unwrap();
        let page = page.finish(1);

        assert_eq!(page.cells().count(), 5);
        assert_eq!(page.filled_text(layout.slot(1).unwrap().name), Some("Cliente2"));
    }

    #[test]
    fn test_fill_pages_leaves_unused_slots_unwritten() {
        let layout = FormLayout::default();
        let pages = fill_pages(&clients(11), &layout).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].slots_used(), 10);
        assert_eq!(pages[1].slots_used(), 1);
        assert_eq!(pages[1].page, 2);

        let last = &pages[1];
        assert_eq!(last.filled_text(layout.slot(1).unwrap().name), Some("Cliente11"));
        assert_eq!(last.filled_text(layout.slot(2).unwrap().name), None);
        assert_eq!(last.cells().count(), 5);
    }

    #[test]
    fn test_pages_do_not_share_slots() {
        let layout = FormLayout::default();
        let pages = fill_pages(&clients(20), &layout).unwrap();
        let name = layout.slot(1).unwrap().name;
        assert_eq!(pages[0].filled_text(name), Some("Cliente1"));
        assert_eq!(pages[1].filled_text(name), Some("Cliente11"));
    }

    #[test]
    fn test_fill_pages_empty() {
        let layout = FormLayout::default();
        assert!(fill_pages(&[], &layout).unwrap().is_empty());
    }
}
