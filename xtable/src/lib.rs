//! A sortable, scrollable data table for text-mode applications.
//!
//! The table is a plain value: feed it events through [`Table::update`],
//! mutate it through its methods, and draw it with [`Table::view`].

pub mod config;
pub mod import;
pub mod index;
pub mod keymap;
pub mod layout;
pub mod row;
pub mod sort;
pub mod style;
pub mod table;

pub use config::TableConfig;
pub use import::{Field, Schema};
pub use index::RowIndex;
pub use keymap::KeyMap;
pub use row::{Column, Metadata, Row, RowIdentity};
pub use sort::{SortHint, SortKind, SortOrder, SortState};
pub use style::Styles;
pub use table::Table;
