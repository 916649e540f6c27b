//! Rows and stable row identity.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::Value;

/// An opaque data record: an optional stable id plus a field map.
///
/// # Example
///
/// ```
/// use vgrid_core::{Row, Value};
///
/// let row = Row::with_id("u-1")
///     .set("name", "Ana")
///     .set("age", 30i64);
///
/// assert_eq!(row.id(), Some("u-1"));
/// assert_eq!(row.get("name"), Some(&Value::from("Ana")));
/// assert_eq!(row.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identity supplied by the data source, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Field values keyed by column key.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Row {
    /// Create an empty row with no identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with the given stable id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    /// Set a field value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field value by column key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The source-supplied id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Stable identity for a row.
///
/// Rows without a source-supplied id get a synthetic key generated once at
/// ingestion and cached on the [`KeyedRow`]. Identity therefore survives
/// re-filtering and re-sorting, unlike a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RowKey {
    /// Source-supplied id.
    Id(String),
    /// Generated at ingestion for rows without an id.
    Synthetic(Uuid),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "{}", id),
            RowKey::Synthetic(uuid) => write!(f, "{}", uuid),
        }
    }
}

/// A row paired with its stable key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRow {
    key: RowKey,
    row: Row,
}

impl KeyedRow {
    /// Key the row: reuse the source id when present, otherwise generate
    /// a synthetic key. Called exactly once per row, at ingestion.
    pub fn ingest(row: Row) -> Self {
        let key = match row.id() {
            Some(id) => RowKey::Id(id.to_string()),
            None => RowKey::Synthetic(Uuid::new_v4()),
        };
        Self { key, row }
    }

    /// The stable key.
    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// The underlying row.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Field value by column key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.row.get(key)
    }
}
