//! Selection state for table rows.
//!
//! Selection tracks row keys, not positions, so it stays stable while rows
//! are re-filtered and re-sorted. Keys of rows currently hidden by a filter
//! are retained; they simply have nothing to render until the filter is
//! cleared.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Single row selection; toggling the sole member clears it.
    Single,
    /// Any number of rows can be selected.
    Multi,
}

/// Tracks selected rows by key.
///
/// Consumers only ever receive [`snapshot`](Selection::snapshot) copies;
/// the internal set is never handed out by reference.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash + Ord> {
    mode: SelectionMode,
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash + Ord> Default for Selection<K> {
    fn default() -> Self {
        Self::none()
    }
}

impl<K: Clone + Eq + Hash + Ord> Selection<K> {
    /// Create a selection that allows nothing.
    pub fn none() -> Self {
        Self {
            mode: SelectionMode::None,
            selected: HashSet::new(),
        }
    }

    /// Create a single-selection.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            selected: HashSet::new(),
        }
    }

    /// Create a multi-selection.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: HashSet::new(),
        }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggle selection for a key. Returns true if the selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// Select every key in `keys`. Multi mode only; returns true if any
    /// key was newly selected.
    pub fn select_all(&mut self, keys: &[K]) -> bool {
        if self.mode != SelectionMode::Multi {
            return false;
        }
        let mut changed = false;
        for key in keys {
            changed |= self.selected.insert(key.clone());
        }
        changed
    }

    /// Clear the selection. Returns true if it was non-empty.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// True when some but not all of `all_keys` are selected.
    ///
    /// Drives a tri-state select-all control. Counts the intersection with
    /// `all_keys`, so stale keys retained from filtered-out rows do not
    /// make a fully-selected view look partial.
    pub fn is_indeterminate(&self, all_keys: &[K]) -> bool {
        let present = all_keys
            .iter()
            .filter(|key| self.selected.contains(*key))
            .count();
        present > 0 && present < all_keys.len()
    }

    /// True when every key in `all_keys` is selected (and there is at
    /// least one).
    pub fn is_all_selected(&self, all_keys: &[K]) -> bool {
        !all_keys.is_empty() && all_keys.iter().all(|key| self.selected.contains(key))
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sorted copy of the selected keys.
    pub fn snapshot(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }
}
