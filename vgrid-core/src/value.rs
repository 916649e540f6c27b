//! Value enum for dynamic cell values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamic value held by a row field.
///
/// Rows are opaque records ingested from API payloads, so fields are typed
/// at runtime. The variant set covers what an administrative table actually
/// displays; anything else falls back to raw JSON.
///
/// # Example
///
/// ```
/// use vgrid_core::Value;
///
/// let name = Value::from("Ana");
/// let age = Value::from(30i64);
/// let empty = Value::Null;
///
/// assert!(empty.is_null());
/// assert_eq!(age.as_f64(), Some(30.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Date and time with timezone.
    ///
    /// Listed before `String` so RFC 3339 strings deserialize as datetimes.
    DateTime(DateTime<Utc>),
    /// String value.
    String(String),
    /// Fallback for structured JSON (arrays, nested objects).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of this value, if it has one.
    ///
    /// Used by the sort comparator: two rows compare numerically only when
    /// both sides are numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Stringified form used for filtering and default cell rendering.
    ///
    /// `Null` stringifies to the empty string; a non-empty filter can
    /// therefore never match a null field.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::String(s) => s.clone(),
            Value::Json(j) => j.to_string(),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::DateTime(_) => "datetime",
            Value::String(_) => "string",
            Value::Json(_) => "json",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
