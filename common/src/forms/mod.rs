//! Reservation form engine
//!
//! Clients are laid ten to a page over the template's fixed slot cells.

pub mod layout;
pub mod page;

pub use layout::{CellRef, FormLayout, SlotCells, DEFAULT_SLOTS, SLOTS_PER_PAGE};
pub use page::{fill_pages, page_count, paginate, CellStyle, FilledCell, FinishedPage, FormPage};
