use crate::import::Schema;
use crate::keymap::KeyMap;
use crate::row::{Column, Metadata, Row};
use crate::style::Styles;

pub const DEFAULT_HEIGHT: usize = 20;

/// Construction-time options for a [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Data lines shown at once.
    pub height: usize,
    pub focused: bool,
    pub row_numbers: bool,
    pub show_header: bool,
    pub key_map: KeyMap,
    pub styles: Styles,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            height: DEFAULT_HEIGHT,
            focused: false,
            row_numbers: false,
            show_header: true,
            key_map: KeyMap::default(),
            styles: Styles::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn row_numbers(mut self, row_numbers: bool) -> Self {
        self.row_numbers = row_numbers;
        self
    }

    pub fn show_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }

    pub fn key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Columns and rows from `records`, through `schema`.
    pub fn records<R>(self, schema: &Schema<R>, records: &[R]) -> Self {
        let (columns, rows) = schema.import(records);
        self.columns(columns).rows(rows)
    }

    /// Like [`TableConfig::records`], with each row addressable by its
    /// record's identity hash.
    pub fn identified_records<R>(self, schema: &Schema<R>, records: &[R]) -> Self
    where
        R: Metadata + Clone + 'static,
    {
        let (columns, rows) = schema.import_identified(records);
        self.columns(columns).rows(rows)
    }
}
