//! Table state.

use termtext::{Event, EventResult, Key, Modifiers};

use crate::config::TableConfig;
use crate::index::RowIndex;
use crate::keymap::KeyMap;
use crate::layout::{
    columns_width, pad_row_number, render_header, render_row, resolve_auto_widths,
    row_number_width, ROW_NUMBER_MARKER,
};
use crate::row::{Column, Row, RowIdentity};
use crate::sort::{self, SortHint, SortOrder, SortState};
use crate::style::Styles;

/// Space between the row-number column and the first data column.
const ROW_NUMBER_GAP: &str = " ";

/// A scrollable table with a single-row cursor.
///
/// Invariants, whenever the table has rows:
/// - `cursor < len()`
/// - `viewport_top <= cursor < viewport_top + height`
/// - `viewport_top <= len() - height` (or 0 when everything fits)
///
/// An empty table has cursor and viewport both at 0.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    index: RowIndex,
    cursor: usize,
    viewport_top: usize,
    height: usize,
    focused: bool,
    row_numbers: bool,
    show_header: bool,
    key_map: KeyMap,
    styles: Styles,
    sort_state: Option<SortState>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let TableConfig {
            mut columns,
            rows,
            height,
            focused,
            row_numbers,
            show_header,
            key_map,
            styles,
        } = config;
        resolve_auto_widths(&mut columns, &rows);

        let mut table = Self {
            columns,
            index: RowIndex::build(&rows),
            rows,
            cursor: 0,
            viewport_top: 0,
            height: 1,
            focused,
            row_numbers,
            show_header,
            key_map,
            styles,
            sort_state: None,
        };
        table.set_height(height);
        table
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn viewport_top(&self) -> usize {
        self.viewport_top
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort_state
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn has_row_numbers(&self) -> bool {
        self.row_numbers
    }

    /// Lines drawn above the first data row.
    pub fn header_height(&self) -> usize {
        usize::from(self.show_header) + usize::from(self.styles.header_rule.is_some())
    }

    /// Visible width of every line in [`Table::view`].
    pub fn width(&self) -> usize {
        let numbers = self
            .row_number_width()
            .map_or(0, |w| w + ROW_NUMBER_GAP.len());
        columns_width(&self.columns) + numbers
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replace every row. The cursor stays where it was, clamped to the new
    /// length.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.index = RowIndex::build(&self.rows);
        self.sort_state = None;
        self.clamp();
    }

    /// Replace the columns, sizing auto-width ones against the current rows.
    pub fn set_columns(&mut self, mut columns: Vec<Column>) {
        resolve_auto_widths(&mut columns, &self.rows);
        self.columns = columns;
        self.sort_state = None;
    }

    /// Number of data lines shown. A height of 0 is raised to 1.
    pub fn set_height(&mut self, height: usize) {
        if height == 0 {
            log::warn!("table height 0 requested, using 1");
        }
        self.height = height.max(1);
        self.clamp();
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    pub fn set_key_map(&mut self, key_map: KeyMap) {
        self.key_map = key_map;
    }

    pub fn set_row_numbers(&mut self, row_numbers: bool) {
        self.row_numbers = row_numbers;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the rows with `text`, one row per line and one cell per
    /// `separator`-delimited field. Blank lines are skipped and there is no
    /// quoting. The cursor moves to the first row.
    pub fn from_delimited_text(&mut self, text: &str, separator: &str) {
        let rows: Vec<Row> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| Row::new(line.split(separator)))
            .collect();
        log::debug!("loaded {} delimited rows", rows.len());
        self.cursor = 0;
        self.viewport_top = 0;
        self.set_rows(rows);
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    /// Line of the cursor within the visible data rows.
    pub fn selected_row_y_offset(&self) -> usize {
        self.cursor - self.viewport_top
    }

    /// Move the cursor to `index`, clamped to the last row.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.clamp();
    }

    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
        self.clamp();
    }

    pub fn move_down(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
        self.clamp();
    }

    pub fn page_up(&mut self) {
        self.move_up(self.height);
    }

    pub fn page_down(&mut self) {
        self.move_down(self.height);
    }

    pub fn half_page_up(&mut self) {
        self.move_up(self.half_page());
    }

    pub fn half_page_down(&mut self) {
        self.move_down(self.half_page());
    }

    pub fn goto_top(&mut self) {
        self.cursor = 0;
        self.clamp();
    }

    pub fn goto_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.clamp();
    }

    fn half_page(&self) -> usize {
        (self.height / 2).max(1)
    }

    /// Restore the cursor and viewport invariants.
    fn clamp(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            self.cursor = 0;
            self.viewport_top = 0;
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        if self.cursor < self.viewport_top {
            self.viewport_top = self.cursor;
        } else if self.cursor >= self.viewport_top + self.height {
            self.viewport_top = self.cursor + 1 - self.height;
        }
        self.viewport_top = self.viewport_top.min(len.saturating_sub(self.height));
    }

    // -------------------------------------------------------------------------
    // Sort, find, lookup
    // -------------------------------------------------------------------------

    /// Stable sort by `column`. Returns false, leaving the table untouched,
    /// when the column does not exist.
    ///
    /// The cursor keeps its position, so it may now point at a different row.
    pub fn sort_by(&mut self, column: usize, order: SortOrder, hint: SortHint) -> bool {
        if column >= self.columns.len() {
            log::debug!(
                "sort on column {column} ignored, table has {}",
                self.columns.len()
            );
            return false;
        }

        let kind = sort::resolve_kind(&self.rows, column, hint);
        sort::sort_rows(&mut self.rows, column, order, kind);
        self.index = RowIndex::build(&self.rows);
        self.sort_state = Some(SortState {
            column,
            order,
            kind,
        });
        self.clamp();

        log::debug!(
            "sorted {} rows by column {column} ({order:?}, {kind:?})",
            self.rows.len()
        );
        true
    }

    /// Move the cursor to the first row containing `term` in any cell.
    ///
    /// With `from = None` the search starts at the first row; with
    /// `Some(i)` it starts just after row `i`. It does not wrap around.
    pub fn find(&mut self, term: &str, from: Option<usize>) -> bool {
        let start = from.map_or(0, |i| i.saturating_add(1));
        let found = self
            .rows
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, row)| row.data.iter().any(|cell| cell.contains(term)))
            .map(|(i, _)| i);

        match found {
            Some(i) => {
                self.set_cursor(i);
                true
            }
            None => false,
        }
    }

    /// Search again from just after the cursor.
    pub fn find_next(&mut self, term: &str) -> bool {
        self.find(term, Some(self.cursor))
    }

    pub fn get_row_by_hash(&self, hash: u64) -> Option<usize> {
        self.index.get(hash)
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    /// Remove row `index`. Returns false when there is no such row.
    ///
    /// A cursor below the removed row moves up with its row.
    pub fn remove_by_index(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }

        let removed = self.rows.remove(index);
        self.index.remove_at(&self.rows, &removed, index);
        if index < self.cursor {
            self.cursor -= 1;
        }
        self.clamp();

        log::debug!("removed row {index}, {} left", self.rows.len());
        true
    }

    /// Remove the row under the cursor. Returns true while rows remain.
    pub fn remove_selected(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.remove_by_index(self.cursor);
        !self.rows.is_empty()
    }

    pub fn remove_by_hash(&mut self, hash: u64) -> bool {
        match self.index.get(hash) {
            Some(index) => self.remove_by_index(index),
            None => false,
        }
    }

    pub fn remove_by_value(&mut self, value: &impl RowIdentity) -> bool {
        self.remove_by_hash(value.identity_hash())
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Apply one input event. Input is ignored while the table is blurred.
    pub fn update(&mut self, event: &Event) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }
        match event {
            Event::Key { key, modifiers } => self.on_key(*key, *modifiers),
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        let map = &self.key_map;
        if map.line_up.matches(key, modifiers) {
            self.move_up(1);
        } else if map.line_down.matches(key, modifiers) {
            self.move_down(1);
        } else if map.page_up.matches(key, modifiers) {
            self.page_up();
        } else if map.page_down.matches(key, modifiers) {
            self.page_down();
        } else if map.half_page_up.matches(key, modifiers) {
            self.half_page_up();
        } else if map.half_page_down.matches(key, modifiers) {
            self.half_page_down();
        } else if map.goto_top.matches(key, modifiers) {
            self.goto_top();
        } else if map.goto_bottom.matches(key, modifiers) {
            self.goto_bottom();
        } else {
            return EventResult::Ignored;
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn row_number_width(&self) -> Option<usize> {
        self.row_numbers.then(|| row_number_width(self.rows.len()))
    }

    /// Row `index` as an unstyled line.
    pub fn render_row(&self, index: usize) -> String {
        let data = self.rows.get(index).map_or(&[][..], |r| r.data.as_slice());
        let cells = render_row(&self.columns, data);
        match self.row_number_width() {
            Some(width) => format!(
                "{}{ROW_NUMBER_GAP}{cells}",
                pad_row_number(width, index + 1)
            ),
            None => cells,
        }
    }

    fn render_header(&self) -> String {
        let titles = render_header(&self.columns);
        match self.row_number_width() {
            Some(width) => format!(
                "{}{ROW_NUMBER_GAP}{titles}",
                pad_row_number(width, ROW_NUMBER_MARKER)
            ),
            None => titles,
        }
    }

    /// The header, then the visible rows, one per line.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(self.height + self.header_height());

        if self.show_header {
            lines.push(self.styles.header.render(&self.render_header()));
        }
        if let Some(rule) = &self.styles.header_rule {
            lines.push(rule.render_rule(self.width()));
        }

        let end = (self.viewport_top + self.height).min(self.rows.len());
        for i in self.viewport_top..end {
            let line = self.render_row(i);
            let style = if i == self.cursor {
                &self.styles.selected
            } else {
                &self.styles.cell
            };
            lines.push(style.render(&line));
        }

        lines.join("\n")
    }
}
