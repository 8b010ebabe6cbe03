//! Turning rows into exact-width display lines.

use termtext::text::{display_width, fit_to_width, pad_left_to_width};

use crate::row::{Column, Row};

/// Marker shown in the header of the row-number column.
pub const ROW_NUMBER_MARKER: &str = "#";

/// Render `data` into one line, each cell fitted to its column: padded with
/// spaces, or truncated with an ellipsis. Missing cells render empty.
pub fn render_row(columns: &[Column], data: &[String]) -> String {
    render_cells(columns, data.iter().map(String::as_str))
}

pub fn render_header(columns: &[Column]) -> String {
    render_cells(columns, columns.iter().map(|c| c.title.as_str()))
}

fn render_cells<'a>(columns: &[Column], mut cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for column in columns {
        let cell = cells.next().unwrap_or("");
        line.push_str(&fit_to_width(cell, column.width));
    }
    line
}

/// Width of the row-number column: the digits needed for `row_count`,
/// never less than one.
pub fn row_number_width(row_count: usize) -> usize {
    let mut width = 1;
    let mut n = row_count / 10;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width
}

/// Right-justify a row number (or the header marker) in `width` cells.
pub fn pad_row_number(width: usize, label: impl ToString) -> String {
    pad_left_to_width(&label.to_string(), width)
}

/// Give every auto-width column `max(title, widest cell) + 1` cells.
pub fn resolve_auto_widths(columns: &mut [Column], rows: &[Row]) {
    for (i, column) in columns.iter_mut().enumerate() {
        if !column.is_auto() {
            continue;
        }
        let widest_cell = rows
            .iter()
            .map(|row| display_width(row.cell(i)))
            .max()
            .unwrap_or(0);
        column.width = display_width(&column.title).max(widest_cell) + 1;
    }
}

/// Sum of the column widths.
pub fn columns_width(columns: &[Column]) -> usize {
    columns.iter().map(|c| c.width).sum()
}
