use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use vgrid_core::{
    compute_visible_range, process, total_height_px, validate_columns, Column, ConfigError,
    FilterMap, KeyedRow, Row, RowKey, Selection, SortSpec, VisibleRange,
};

use crate::config::TableConfig;
use crate::debounce::Debouncer;
use crate::events::TableEvents;
use crate::loader::{LoaderEvent, PageLoader};
use crate::source::RowSource;

/// The table engine.
///
/// All mutation happens through `&mut self` on the owning task. Background
/// work (debounce timers, page fetches) completes onto internal channels
/// which [`pump`](TableGrid::pump) drains, so state never changes under the
/// caller's feet.
#[derive(Debug)]
pub struct TableGrid {
    columns: Vec<Column>,
    config: TableConfig,
    events: TableEvents,
    rows: Vec<KeyedRow>,
    processed: Vec<KeyedRow>,
    filters: FilterMap,
    sort: SortSpec,
    selection: Selection<RowKey>,
    scroll_offset: u32,
    filter_debounce: Debouncer<(String, String)>,
    filter_rx: UnboundedReceiver<(String, String)>,
    loader: Option<PageLoader>,
}

impl TableGrid {
    /// Create a table over a column set and configuration.
    ///
    /// Both are validated here; a bad column set or zero geometry fails at
    /// construction, never mid-render.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Result<Self, ConfigError> {
        validate_columns(&columns)?;
        config.validate()?;

        let selection = if !config.selectable {
            Selection::none()
        } else if config.multi_select {
            Selection::multi()
        } else {
            Selection::single()
        };

        let (filter_tx, filter_rx): (
            UnboundedSender<(String, String)>,
            UnboundedReceiver<(String, String)>,
        ) = mpsc::unbounded_channel();
        let filter_debounce = Debouncer::new(config.debounce_delay, move |args| {
            let _ = filter_tx.send(args);
        });

        Ok(Self {
            columns,
            config,
            events: TableEvents::new(),
            rows: Vec::new(),
            processed: Vec::new(),
            filters: FilterMap::new(),
            sort: SortSpec::none(),
            selection,
            scroll_offset: 0,
            filter_debounce,
            filter_rx,
            loader: None,
        })
    }

    /// Attach event callbacks.
    pub fn with_events(mut self, events: TableEvents) -> Self {
        self.events = events;
        self
    }

    /// Attach a paged row source for infinite scrolling.
    ///
    /// Page size and tail threshold come from the configuration; the
    /// consumer still supplies page 1 via [`set_rows`](TableGrid::set_rows).
    pub fn with_source(mut self, source: Arc<dyn RowSource>) -> Self {
        self.loader = Some(PageLoader::new_dyn(
            source,
            self.config.page_size,
            self.config.tail_threshold,
        ));
        self
    }

    // ========================================================================
    // Rows
    // ========================================================================

    /// Replace the row store. Each row is keyed exactly once here.
    ///
    /// Selection is kept as-is; keys no longer present simply have nothing
    /// to render.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows.into_iter().map(KeyedRow::ingest).collect();
        self.reprocess();
    }

    /// Append rows to the store, keying each exactly once.
    pub fn extend_rows(&mut self, rows: Vec<Row>) {
        self.rows.extend(rows.into_iter().map(KeyedRow::ingest));
        self.reprocess();
    }

    /// All ingested rows, in ingestion order.
    pub fn rows(&self) -> &[KeyedRow] {
        &self.rows
    }

    /// The post-filter, post-sort row sequence.
    pub fn processed(&self) -> &[KeyedRow] {
        &self.processed
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Record filter keystrokes for a column.
    ///
    /// Debounced: the query pipeline re-runs only after the configured
    /// quiet period, with the latest text. Ignored when filtering is off
    /// for the table or the column.
    pub fn filter_input(&mut self, column_key: &str, text: impl Into<String>) {
        if !self.config.filterable {
            return;
        }
        let Some(column) = self.columns.iter().find(|c| c.key == column_key) else {
            log::debug!("filter input for unknown column {column_key:?} ignored");
            return;
        };
        if !column.filterable {
            return;
        }
        self.filter_debounce.schedule((column.key.clone(), text.into()));
    }

    /// Active per-column filter text.
    pub fn filters(&self) -> &FilterMap {
        &self.filters
    }

    /// Remove every filter immediately, bypassing the debounce.
    pub fn clear_filters(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        self.filters.clear();
        self.reprocess();
        self.events.emit_filter(&self.filters);
    }

    fn commit_filter(&mut self, column_key: String, text: String) {
        self.filters.set(column_key, text);
        self.reprocess();
        self.events.emit_filter(&self.filters);
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Cycle the sort for a column: unsorted to ascending, ascending to
    /// descending, descending back to ascending.
    ///
    /// Sorting a different column always starts ascending. Ignored when
    /// sorting is off for the table or the column.
    pub fn toggle_sort(&mut self, column_key: &str) {
        if !self.config.sortable {
            return;
        }
        let Some(column) = self.columns.iter().find(|c| c.key == column_key) else {
            log::debug!("sort toggle for unknown column {column_key:?} ignored");
            return;
        };
        if !column.sortable {
            return;
        }

        if self.sort.key.as_deref() == Some(column_key) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortSpec::asc(column_key);
        }
        self.reprocess();
        self.events.emit_sort(&self.sort);
    }

    /// The active sort specification.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Set the scroll offset in pixels, clamped to the scrollable extent.
    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// Current scroll offset in pixels.
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Resize the scroll container, re-clamping the offset.
    pub fn set_container_height(&mut self, height: u32) {
        if height == 0 {
            log::debug!("ignoring zero container height");
            return;
        }
        self.config.container_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// The row index range eligible for rendering, if any rows exist.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        compute_visible_range(
            self.scroll_offset,
            self.config.row_height,
            self.config.container_height,
            self.config.overscan,
            self.processed.len(),
        )
    }

    fn max_scroll_offset(&self) -> u32 {
        let extent = total_height_px(self.processed.len(), self.config.row_height)
            .saturating_sub(u64::from(self.config.container_height));
        extent.min(u64::from(u32::MAX)) as u32
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Toggle selection of a row by key.
    pub fn toggle_row(&mut self, key: RowKey) {
        if self.selection.toggle(key) {
            self.emit_selection();
        }
    }

    /// Select every row in the processed sequence. Multi-select only.
    pub fn select_all_visible(&mut self) {
        let keys: Vec<RowKey> = self.processed.iter().map(|r| r.key().clone()).collect();
        if self.selection.select_all(&keys) {
            self.emit_selection();
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.emit_selection();
        }
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection<RowKey> {
        &self.selection
    }

    fn emit_selection(&self) {
        let keys = self.selection.snapshot();
        let rows: Vec<Row> = self
            .processed
            .iter()
            .filter(|r| self.selection.is_selected(r.key()))
            .map(|r| r.row().clone())
            .collect();
        self.events.emit_select(&rows, &keys);
    }

    // ========================================================================
    // Async plumbing
    // ========================================================================

    /// Drain completed background work and run the tail sentinel.
    ///
    /// Call once per event-loop turn (after awaiting input, timers, or
    /// yielding). Applies debounced filter commits in schedule order (the
    /// last commit per column wins), ingests loaded pages, and triggers a
    /// fetch when the visible tail is near the end.
    ///
    /// Returns `true` when any state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;

        while let Ok((column_key, text)) = self.filter_rx.try_recv() {
            self.commit_filter(column_key, text);
            changed = true;
        }

        if let Some(loader) = &mut self.loader {
            let mut pages = Vec::new();
            for event in loader.try_drain() {
                match event {
                    LoaderEvent::Loaded(page) => pages.push(page),
                    // Already logged by the loader; the next sentinel
                    // trigger retries.
                    LoaderEvent::Failed(_) => changed = true,
                }
            }
            for page in pages {
                self.extend_rows(page.items);
                changed = true;
            }
        }

        changed |= self.maybe_load_more();
        changed
    }

    /// Whether a page fetch is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.loader.as_ref().is_some_and(PageLoader::is_loading)
    }

    /// Cancel timers and in-flight fetches.
    ///
    /// Call when the table is discarded; afterwards no callback or loader
    /// event fires.
    pub fn teardown(&mut self) {
        self.filter_debounce.teardown();
        if let Some(loader) = &mut self.loader {
            loader.teardown();
        }
    }

    fn maybe_load_more(&mut self) -> bool {
        let Some(visible_end) = self.visible_range().map(|r| r.end) else {
            return false;
        };
        let total = self.processed.len();
        let Some(loader) = &mut self.loader else {
            return false;
        };
        if loader.watch(visible_end, total) {
            self.events.emit_load_more();
            return true;
        }
        false
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn reprocess(&mut self) {
        self.processed = process(&self.rows, &self.filters, &self.sort);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }
}

impl Drop for TableGrid {
    fn drop(&mut self) {
        self.teardown();
    }
}
