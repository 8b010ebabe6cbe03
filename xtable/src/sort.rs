//! Row ordering.
//!
//! Sorting is stable in both directions: descending reverses the comparator,
//! so rows with equal keys keep the order they had before the sort.

use std::cmp::Ordering;

use crate::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How the caller wants a column compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortHint {
    /// Numeric if every value in the column parses as a number.
    #[default]
    Unspecified,
    String,
    Numeric,
}

/// The comparison actually used for a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    String,
    Numeric,
}

/// The most recent sort applied to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub order: SortOrder,
    pub kind: SortKind,
}

pub fn resolve_kind(rows: &[Row], column: usize, hint: SortHint) -> SortKind {
    match hint {
        SortHint::String => SortKind::String,
        SortHint::Numeric => SortKind::Numeric,
        SortHint::Unspecified => {
            if rows.iter().all(|row| parse_number(row.cell(column)).is_some()) {
                SortKind::Numeric
            } else {
                SortKind::String
            }
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn compare(a: &str, b: &str, kind: SortKind) -> Ordering {
    match kind {
        SortKind::String => a.cmp(b),
        SortKind::Numeric => {
            let a = parse_number(a).unwrap_or(f64::NEG_INFINITY);
            let b = parse_number(b).unwrap_or(f64::NEG_INFINITY);
            a.total_cmp(&b)
        }
    }
}

/// Stable in-place sort of `rows` by one column.
pub fn sort_rows(rows: &mut [Row], column: usize, order: SortOrder, kind: SortKind) {
    rows.sort_by(|a, b| {
        let ordering = compare(a.cell(column), b.cell(column), kind);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
