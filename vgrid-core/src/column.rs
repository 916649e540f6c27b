//! Column definitions and eager validation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::row::Row;
use crate::value::Value;

/// Custom cell renderer: `(value, row, row_index) -> text`.
///
/// Must be pure presentation; no side effects.
pub type CellRenderer = Arc<dyn Fn(&Value, &Row, usize) -> String + Send + Sync>;

/// Column width specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in pixels.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// Horizontal cell alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A table column definition.
#[derive(Clone)]
pub struct Column {
    /// Unique identifier; addresses a field on each row.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Width specification.
    pub width: ColumnWidth,
    /// Cell alignment.
    pub align: Align,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Whether this column offers a filter input.
    pub filterable: bool,
    /// Optional custom cell renderer.
    pub renderer: Option<CellRenderer>,
}

impl Column {
    /// Create a new column with the given key and header title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: ColumnWidth::default(),
            align: Align::default(),
            sortable: true,
            filterable: true,
            renderer: None,
        }
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set whether this column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether this column is filterable.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Set a custom cell renderer.
    pub fn renderer(
        mut self,
        renderer: impl Fn(&Value, &Row, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Validate a column set up front.
///
/// Rejects empty and duplicate keys so misconfiguration fails at setup
/// rather than rendering blank cells later.
pub fn validate_columns(columns: &[Column]) -> Result<(), ConfigError> {
    if columns.is_empty() {
        return Err(ConfigError::NoColumns);
    }

    let mut seen = HashSet::new();
    for (index, column) in columns.iter().enumerate() {
        if column.key.trim().is_empty() {
            return Err(ConfigError::EmptyColumnKey { index });
        }
        if !seen.insert(column.key.as_str()) {
            return Err(ConfigError::DuplicateColumnKey {
                key: column.key.clone(),
            });
        }
    }

    Ok(())
}
