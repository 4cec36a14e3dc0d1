//! Listatron Common Library
//!
//! Pipeline core shared by the CLI: inventory export correction and
//! categorization, and the paginated reservation form engine.

pub mod types;
pub mod error;
pub mod remap;
pub mod aggregate;
pub mod categorize;
pub mod pipeline;
pub mod forms;
pub mod export;

pub use types::{AggregatedGroup, ClientRecord, CorrectedRecord, GroupKey};
pub use error::{Error, Result};
pub use remap::{ColumnMap, Field, RawTable, RemappedRecord, SHIFT_TABLE};
pub use aggregate::aggregate;
pub use categorize::{classify, Category, CategorySummary, CategoryTables, CATEGORY_RULES};
pub use pipeline::{sort_inventory, SortedReport};
pub use forms::{
    fill_pages, page_count, paginate, CellRef, CellStyle, FilledCell, FinishedPage, FormLayout,
    FormPage, SlotCells, SLOTS_PER_PAGE,
};
