//! Engine output events.
//!
//! Typed callbacks registered builder-style. Every payload is a snapshot:
//! consumers never receive references into the engine's mutable state.

use std::fmt;
use std::sync::Arc;

use vgrid_core::{FilterMap, Row, RowKey, SortSpec};

type SortHandler = Arc<dyn Fn(&SortSpec) + Send + Sync>;
type FilterHandler = Arc<dyn Fn(&FilterMap) + Send + Sync>;
type SelectHandler = Arc<dyn Fn(&[Row], &[RowKey]) + Send + Sync>;
type LoadMoreHandler = Arc<dyn Fn() + Send + Sync>;

/// Optional event callbacks fired by the table engine.
#[derive(Clone, Default)]
pub struct TableEvents {
    on_sort: Option<SortHandler>,
    on_filter: Option<FilterHandler>,
    on_select: Option<SelectHandler>,
    on_load_more: Option<LoadMoreHandler>,
}

impl TableEvents {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after the sort spec changes.
    pub fn on_sort(mut self, handler: impl Fn(&SortSpec) + Send + Sync + 'static) -> Self {
        self.on_sort = Some(Arc::new(handler));
        self
    }

    /// Called after a debounced filter commit.
    pub fn on_filter(mut self, handler: impl Fn(&FilterMap) + Send + Sync + 'static) -> Self {
        self.on_filter = Some(Arc::new(handler));
        self
    }

    /// Called after the selection changes, with the selected rows (as
    /// currently visible in the processed sequence) and all selected keys.
    pub fn on_select(
        mut self,
        handler: impl Fn(&[Row], &[RowKey]) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    /// Called when the sentinel triggers a page load.
    pub fn on_load_more(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_load_more = Some(Arc::new(handler));
        self
    }

    pub(crate) fn emit_sort(&self, sort: &SortSpec) {
        if let Some(handler) = &self.on_sort {
            handler(sort);
        }
    }

    pub(crate) fn emit_filter(&self, filters: &FilterMap) {
        if let Some(handler) = &self.on_filter {
            handler(filters);
        }
    }

    pub(crate) fn emit_select(&self, rows: &[Row], keys: &[RowKey]) {
        if let Some(handler) = &self.on_select {
            handler(rows, keys);
        }
    }

    pub(crate) fn emit_load_more(&self) {
        if let Some(handler) = &self.on_load_more {
            handler();
        }
    }
}

impl fmt::Debug for TableEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEvents")
            .field("on_sort", &self.on_sort.is_some())
            .field("on_filter", &self.on_filter.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_load_more", &self.on_load_more.is_some())
            .finish()
    }
}
