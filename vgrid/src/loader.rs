//! Infinite-scroll page loader.
//!
//! A two-state machine (`Idle` / `Loading`) guarding an async page fetch.
//! The sentinel is the tail of the rendered row list: when fewer than
//! `tail_threshold` rows remain below the visible range, the loader
//! triggers exactly one fetch. Triggers received while a fetch is in
//! flight are no-ops — that guard is the property preventing duplicate
//! requests on fast scrolling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::source::{RowPage, RowSource, SourceError};

/// Loading phase of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch in flight; triggers are accepted.
    #[default]
    Idle,
    /// A fetch is in flight; triggers are ignored.
    Loading,
}

/// Outcome of a completed fetch, delivered on the loader channel.
#[derive(Debug)]
pub enum LoaderEvent {
    /// A page arrived.
    Loaded(RowPage),
    /// The fetch failed. Already logged; no automatic retry — the next
    /// sentinel trigger attempts again.
    Failed(SourceError),
}

/// Watches the rendered tail and fetches the next page on demand.
///
/// Completed fetches land on an internal channel; the owner drains them
/// with [`try_drain`](PageLoader::try_drain) on its event loop, so all row
/// mutation stays on the owner's thread. There is no fetch timeout: a
/// source that never resolves holds `Loading` until teardown.
pub struct PageLoader {
    source: Arc<dyn RowSource>,
    page_size: usize,
    tail_threshold: usize,
    has_next_page: bool,
    current_page: u32,
    // Flips back to false only in apply/teardown, never in the fetch task:
    // clearing it there would let the sentinel see Idle while current_page
    // is stale and fetch the same page twice.
    loading: AtomicBool,
    events_tx: UnboundedSender<LoaderEvent>,
    events_rx: UnboundedReceiver<LoaderEvent>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for PageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLoader")
            .field("page_size", &self.page_size)
            .field("tail_threshold", &self.tail_threshold)
            .field("has_next_page", &self.has_next_page)
            .field("current_page", &self.current_page)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl PageLoader {
    /// Create a loader over a source.
    ///
    /// Page 1 is assumed already loaded by the consumer; the first trigger
    /// requests page 2.
    pub fn new(
        source: Arc<impl RowSource + 'static>,
        page_size: usize,
        tail_threshold: usize,
    ) -> Self {
        Self::new_dyn(source, page_size, tail_threshold)
    }

    pub(crate) fn new_dyn(
        source: Arc<dyn RowSource>,
        page_size: usize,
        tail_threshold: usize,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            source,
            page_size,
            tail_threshold,
            has_next_page: true,
            current_page: 1,
            loading: AtomicBool::new(false),
            events_tx,
            events_rx,
            cancel: CancellationToken::new(),
        }
    }

    /// Whether the source has reported more pages.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Mark whether more pages are available (e.g. after the consumer
    /// loads page 1 itself).
    pub fn set_has_next_page(&mut self, has_next_page: bool) {
        self.has_next_page = has_next_page;
    }

    /// Whether a fetch is in flight or completed but not yet drained.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Current phase.
    pub fn phase(&self) -> LoadPhase {
        if self.is_loading() {
            LoadPhase::Loading
        } else {
            LoadPhase::Idle
        }
    }

    /// Highest page number applied so far.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Sentinel check: trigger a fetch once fewer than `tail_threshold`
    /// rows remain below the visible tail.
    ///
    /// Returns `true` if a fetch was started.
    pub fn watch(&mut self, visible_end: usize, total: usize) -> bool {
        if total == 0 {
            return false;
        }
        if visible_end + self.tail_threshold < total {
            return false;
        }
        self.trigger()
    }

    /// Start fetching the next page, unless one is already in flight, the
    /// source is exhausted, or the loader has been torn down.
    ///
    /// Returns `true` if a fetch was started.
    pub fn trigger(&mut self) -> bool {
        if !self.has_next_page || self.cancel.is_cancelled() {
            return false;
        }

        // The one lock in the engine: Idle -> Loading, or bail.
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("load trigger ignored: fetch already in flight");
            return false;
        }

        let page = self.current_page + 1;
        let page_size = self.page_size;
        let source = Arc::clone(&self.source);
        let events_tx = self.events_tx.clone();
        let cancel = self.cancel.clone();

        log::debug!("loading page {page} ({page_size} rows)");

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    // Torn down mid-flight: drop the result entirely.
                }
                result = source.load_page(page, page_size) => {
                    let event = match result {
                        Ok(rows) => LoaderEvent::Loaded(rows),
                        Err(err) => {
                            log::error!("failed to load page {page}: {err}");
                            LoaderEvent::Failed(err)
                        }
                    };
                    let _ = events_tx.send(event);
                }
            }
        });

        true
    }

    /// Drain completed fetches, advancing the page counter and next-page
    /// flag for each applied page. The loader returns to `Idle` here, in
    /// the same step as the bookkeeping.
    pub fn try_drain(&mut self) -> Vec<LoaderEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(&event);
            events.push(event);
        }
        events
    }

    /// Await the next completed fetch. Applies the same bookkeeping as
    /// [`try_drain`](PageLoader::try_drain).
    pub async fn recv(&mut self) -> Option<LoaderEvent> {
        let event = self.events_rx.recv().await?;
        self.apply(&event);
        Some(event)
    }

    fn apply(&mut self, event: &LoaderEvent) {
        if let LoaderEvent::Loaded(page) = event {
            self.current_page += 1;
            self.has_next_page = page.has_next_page;
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Disconnect the sentinel watch and detach any in-flight fetch.
    ///
    /// The in-flight task is not awaited; its result is dropped and the
    /// phase returns to `Idle`. Also runs on drop.
    pub fn teardown(&mut self) {
        self.cancel.cancel();
        self.loading.store(false, Ordering::SeqCst);
    }
}

impl Drop for PageLoader {
    fn drop(&mut self) {
        self.teardown();
    }
}
