//! Filter/sort query pipeline.
//!
//! `process` is a pure function from `(rows, filters, sort)` to a new row
//! sequence: filtering always runs before sorting, input is never mutated,
//! and re-running the pipeline on its own output is a no-op.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::row::KeyedRow;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort specification. `key: None` means unsorted (input order preserved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Unsorted spec.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending sort on the given column key.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on the given column key.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Desc,
        }
    }

    /// Whether a sort key is set.
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }
}

/// Per-column filter text. Absent or blank text means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap {
    map: HashMap<String, String>,
}

impl FilterMap {
    /// Empty filter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter text for a column. Blank text removes the filter.
    pub fn set(&mut self, column_key: impl Into<String>, text: impl Into<String>) {
        let column_key = column_key.into();
        let text = text.into();
        if text.trim().is_empty() {
            self.map.remove(&column_key);
        } else {
            self.map.insert(column_key, text);
        }
    }

    /// The filter text for a column, if active.
    pub fn get(&self, column_key: &str) -> Option<&str> {
        self.map.get(column_key).map(String::as_str)
    }

    /// Remove all filters.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over active `(column_key, text)` pairs.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of active filters.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Run the query pipeline: filter, then sort.
///
/// Produces a new sequence; the input slice is never mutated. The sort is
/// stable, so rows with equal sort keys keep their input (post-filter)
/// order.
pub fn process(rows: &[KeyedRow], filters: &FilterMap, sort: &SortSpec) -> Vec<KeyedRow> {
    let mut result: Vec<KeyedRow> = rows
        .iter()
        .filter(|row| row_matches(row, filters))
        .cloned()
        .collect();

    if let Some(key) = &sort.key {
        result.sort_by(|a, b| compare_rows(a, b, key, sort.direction));
    }

    result
}

/// A row passes when every active filter matches.
fn row_matches(row: &KeyedRow, filters: &FilterMap) -> bool {
    filters.active().all(|(column_key, text)| {
        match row.get(column_key) {
            // Null fields never match an active filter.
            None | Some(Value::Null) => false,
            Some(value) => value
                .display_text()
                .to_lowercase()
                .contains(&text.to_lowercase()),
        }
    })
}

/// Compare two rows at the sort key.
///
/// Nulls sort after all defined values regardless of direction; the
/// direction only reverses comparisons between defined values.
fn compare_rows(a: &KeyedRow, b: &KeyedRow, key: &str, direction: SortDirection) -> Ordering {
    let a_val = a.get(key).filter(|v| !v.is_null());
    let b_val = b.get(key).filter(|v| !v.is_null());

    match (a_val, b_val) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_val), Some(b_val)) => {
            let ordering = compare_values(a_val, b_val);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

/// Numeric compare when both values are numeric, case-folded string
/// compare otherwise.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(a_num), Some(b_num)) = (a.as_f64(), b.as_f64()) {
        return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
    }

    a.display_text()
        .to_lowercase()
        .cmp(&b.display_text().to_lowercase())
}
