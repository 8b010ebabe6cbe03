//! Building columns and rows from typed records.
//!
//! A [`Schema`] lists the fields to show, in order, each with a title and a
//! function that turns a record into the cell text.
//!
//! ```
//! use xtable::{Field, Schema};
//!
//! struct Biscuit {
//!     name: String,
//!     packet_size: u32,
//! }
//!
//! let schema = Schema::new()
//!     .field(Field::new("Name", |b: &Biscuit| b.name.clone()).title("Biscuit"))
//!     .field(Field::new("PacketSize", |b: &Biscuit| b.packet_size.to_string()));
//!
//! let (columns, rows) = schema.import(&[Biscuit {
//!     name: "Hobnobs".into(),
//!     packet_size: 10,
//! }]);
//! assert_eq!(columns[0].title, "Biscuit");
//! assert_eq!(rows[0].data, vec!["Hobnobs", "10"]);
//! ```

use std::fmt;

use crate::layout::resolve_auto_widths;
use crate::row::{Column, Metadata, Row};

type Extract<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

pub struct Field<R> {
    title: String,
    width: usize,
    extract: Extract<R>,
}

impl<R> Field<R> {
    /// A field named `name`, sized to its content.
    pub fn new(
        name: impl Into<String>,
        extract: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: name.into(),
            width: 0,
            extract: Box::new(extract),
        }
    }

    /// Override the column title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fixed column width; 0 sizes the column to its content.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn column(&self) -> Column {
        Column::new(self.title.clone(), self.width)
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("title", &self.title)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Schema<R> {
    fields: Vec<Field<R>>,
}

impl<R> Default for Schema<R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<R> Schema<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field<R>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns and rows for `records`. Rows carry no metadata.
    ///
    /// # Panics
    ///
    /// If the schema has no fields.
    pub fn import(&self, records: &[R]) -> (Vec<Column>, Vec<Row>) {
        self.import_with(records, |_, data| Row::new(data))
    }

    /// Like [`Schema::import`], but each row keeps a clone of its record so it
    /// can be found again by identity hash.
    ///
    /// # Panics
    ///
    /// If the schema has no fields.
    pub fn import_identified(&self, records: &[R]) -> (Vec<Column>, Vec<Row>)
    where
        R: Metadata + Clone + 'static,
    {
        self.import_with(records, |record, data| {
            Row::with_metadata(data, record.clone())
        })
    }

    fn import_with(
        &self,
        records: &[R],
        make_row: impl Fn(&R, Vec<String>) -> Row,
    ) -> (Vec<Column>, Vec<Row>) {
        assert!(
            !self.fields.is_empty(),
            "cannot import records through a schema with no fields"
        );

        let rows: Vec<Row> = records
            .iter()
            .map(|record| {
                let data = self.fields.iter().map(|f| (f.extract)(record)).collect();
                make_row(record, data)
            })
            .collect();

        let mut columns: Vec<Column> = self.fields.iter().map(Field::column).collect();
        resolve_auto_widths(&mut columns, &rows);

        log::debug!(
            "imported {} records into {} columns",
            rows.len(),
            columns.len()
        );
        (columns, rows)
    }
}
