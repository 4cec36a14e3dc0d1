//! Slot layout of the reservation form template
//!
//! The template sheet holds ten forms. Each slot is five cells at fixed
//! positions; the table below is the contract with the template file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Forms per template page
pub const SLOTS_PER_PAGE: usize = 10;

/// Default slot cells. Two forms per band (columns B and G), five bands of
/// eight rows. Slot 1 is B3 B4 B5 B7 D7, slot 2 is G3 G4 G5 G7 I7.
pub const DEFAULT_SLOTS: [SlotCells; SLOTS_PER_PAGE] = [
    SlotCells::band(3, 'B'),
    SlotCells::band(3, 'G'),
    SlotCells::band(11, 'B'),
    SlotCells::band(11, 'G'),
    SlotCells::band(19, 'B'),
    SlotCells::band(19, 'G'),
    SlotCells::band(27, 'B'),
    SlotCells::band(27, 'G'),
    SlotCells::band(35, 'B'),
    SlotCells::band(35, 'G'),
];

/// Zero-based cell coordinate, written in A1 notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::Layout(format!("invalid cell reference: '{}'", s)))?;
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Layout(format!("invalid cell reference: '{}'", s)));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > 16_384 {
                return Err(Error::Layout(format!("column out of range: '{}'", s)));
            }
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::Layout(format!("invalid cell reference: '{}'", s)))?;
        if row == 0 || row > 1_048_576 {
            return Err(Error::Layout(format!("row out of range: '{}'", s)));
        }

        Ok(Self::new(row - 1, (col - 1) as u16))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.col as u32 + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        let letters: String = letters.into_iter().rev().collect();
        write!(f, "{}{}", letters, self.row + 1)
    }
}

impl TryFrom<String> for CellRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CellRef> for String {
    fn from(cell: CellRef) -> Self {
        cell.to_string()
    }
}

/// The five cells of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCells {
    pub name: CellRef,
    pub number: CellRef,
    pub observation: CellRef,
    pub worker: CellRef,
    pub date: CellRef,
}

impl SlotCells {
    pub fn cells(&self) -> [CellRef; 5] {
        [self.name, self.number, self.observation, self.worker, self.date]
    }

    /// Slot with its name cell at A1 `column` + `top`. Number and
    /// observation sit below it, worker two rows further down, date two
    /// columns right of the worker.
    const fn band(top: u32, column: char) -> Self {
        let row = top - 1;
        let col = (column as u8 - b'A') as u16;
        Self {
            name: CellRef::new(row, col),
            number: CellRef::new(row + 1, col),
            observation: CellRef::new(row + 2, col),
            worker: CellRef::new(row + 4, col),
            date: CellRef::new(row + 4, col + 2),
        }
    }
}

/// Validated ten-slot layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    slots: Vec<SlotCells>,
}

impl FormLayout {
    /// Build a layout, rejecting a wrong slot count or a cell used twice.
    pub fn from_slots(slots: Vec<SlotCells>) -> Result<Self> {
        if slots.len() != SLOTS_PER_PAGE {
            return Err(Error::Layout(format!(
                "expected {} slots, got {}",
                SLOTS_PER_PAGE,
                slots.len()
            )));
        }

        let mut seen = HashSet::new();
        for (i, slot) in slots.iter().enumerate() {
            for cell in slot.cells() {
                if !seen.insert(cell) {
                    return Err(Error::Layout(format!(
                        "cell {} reused by slot {}",
                        cell,
                        i + 1
                    )));
                }
            }
        }

        Ok(Self { slots })
    }

    /// Cells of a 1-based slot
    pub fn slot(&self, slot: usize) -> Option<&SlotCells> {
        slot.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn slots(&self) -> &[SlotCells] {
        &self.slots
    }
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!("A1".parse::<CellRef>().unwrap(), CellRef::new(0, 0));
        assert_eq!("B3".parse::<CellRef>().unwrap(), CellRef::new(2, 1));
        assert_eq!("z10".parse::<CellRef>().unwrap(), CellRef::new(9, 25));
        assert_eq!("AA1".parse::<CellRef>().unwrap(), CellRef::new(0, 26));
        assert_eq!(" I39 ".parse::<CellRef>().unwrap(), CellRef::new(38, 8));
    }

    #[test]
    fn test_parse_cell_ref_invalid() {
        for bad in ["", "3", "B", "B0", "1B", "B-3", "B3C", "XFE1"] {
            assert!(bad.parse::<CellRef>().is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_display_cell_ref() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(38, 8).to_string(), "I39");
        assert_eq!(CellRef::new(0, 26).to_string(), "AA1");
        assert_eq!(CellRef::new(4, 701).to_string(), "ZZ5");
        assert_eq!(CellRef::new(4, 702).to_string(), "AAA5");
    }

    #[test]
    fn test_default_layout() {
        let layout = FormLayout::default();
        assert_eq!(layout.slots().len(), SLOTS_PER_PAGE);
        assert_eq!(FormLayout::from_slots(DEFAULT_SLOTS.to_vec()).unwrap(), layout);

        let a1 = |slot: usize| -> Vec<String> {
            layout.slot(slot).unwrap().cells().iter().map(|c| c.to_string()).collect()
        };
        assert_eq!(a1(1), ["B3", "B4", "B5", "B7", "D7"]);
        assert_eq!(a1(2), ["G3", "G4", "G5", "G7", "I7"]);
        assert_eq!(a1(3), ["B11", "B12", "B13", "B15", "D15"]);
        assert_eq!(a1(10), ["G35", "G36", "G37", "G39", "I39"]);
        assert!(layout.slot(0).is_none());
        assert!(layout.slot(11).is_none());
    }

    #[test]
    fn test_layout_rejects_wrong_count() {
        let err = FormLayout::from_slots(DEFAULT_SLOTS[..9].to_vec()).unwrap_err();
        assert!(matches!(err, Error::Layout(_)));
    }

    #[test]
    fn test_layout_rejects_reused_cell() {
        let mut slots = DEFAULT_SLOTS.to_vec();
        slots[4].observation = "B3".parse().unwrap();
        let err = FormLayout::from_slots(slots).unwrap_err();
        assert!(err.to_string().contains("B3"));
        assert!(err.to_string().contains("slot 5"));
    }

    #[test]
    fn test_slot_cells_serde() {
        let slot = FormLayout::default().slot(2).copied().unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"G3\""));
        let back: SlotCells = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
        assert!(serde_json::from_str::<CellRef>("\"??\"").is_err());
    }
}
