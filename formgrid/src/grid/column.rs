use std::fmt;

use termdom::Element;

use crate::record::Record;
use crate::value::Value;

/// Custom cell content: `(field value, record, display row index)`.
pub type CellRenderer<T> = Box<dyn Fn(&Value, &T, usize) -> Element>;

/// A table column definition.
pub struct Column<T: Record> {
    /// Unique identifier for this column.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Attribute the column reads.
    pub field: T::Field,
    pub sortable: bool,
    /// Width hint in terminal columns. Sized to content when unset.
    pub width: Option<u16>,
    render: Option<CellRenderer<T>>,
}

impl<T: Record> Column<T> {
    pub fn new(key: impl Into<String>, title: impl Into<String>, field: T::Field) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field,
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Replace the default text cell with custom content.
    pub fn render(mut self, render: impl Fn(&Value, &T, usize) -> Element + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Content for this column's cell in `record`, shown at display row `index`.
    pub fn cell(&self, record: &T, index: usize) -> Element {
        let value = record.value(self.field);
        match &self.render {
            Some(render) => render(&value, record, index),
            None => Element::text(value.to_string()),
        }
    }
}

impl<T: Record> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
