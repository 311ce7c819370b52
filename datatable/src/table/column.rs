use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use celldom::{Element, Style};

use crate::error::TableError;
use crate::record::Record;

/// Shown in place of a missing or null field value.
pub const PLACEHOLDER: &str = "—";

/// Custom cell content builder.
pub type CellRenderer = Rc<dyn Fn(&Record) -> Element>;

/// Where a column's cell content comes from.
#[derive(Clone, Default)]
pub enum CellSource {
    /// Look the column key up in the row; missing or null shows [`PLACEHOLDER`].
    #[default]
    Field,
    /// Build the content from the whole row.
    Render(CellRenderer),
}

impl fmt::Debug for CellSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSource::Field => f.write_str("Field"),
            CellSource::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// A table column definition.
#[derive(Clone, Debug)]
pub struct Column {
    /// Field this column reads; unique within a table.
    pub key: String,
    /// Header text displayed at the top.
    pub header: String,
    pub cell: CellSource,
    /// Style hook applied to the header cell and every body cell.
    pub class: Option<String>,
}

impl Column {
    /// Create a new column reading `key`, labelled `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            cell: CellSource::Field,
            class: None,
        }
    }

    /// Render cells with a custom builder instead of the raw field value.
    pub fn render(mut self, renderer: impl Fn(&Record) -> Element + 'static) -> Self {
        self.cell = CellSource::Render(Rc::new(renderer));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Resolve the content for this column in `row`.
    pub fn resolve(&self, row: &Record) -> Element {
        match &self.cell {
            CellSource::Render(renderer) => renderer(row),
            CellSource::Field => match row.value(&self.key) {
                Some(value) => Element::text(value.to_string()),
                None => Element::text(PLACEHOLDER).style(Style::new().dim()),
            },
        }
    }
}

/// Check that no two columns share a key.
pub fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(column.key.clone()));
        }
    }
    Ok(())
}
