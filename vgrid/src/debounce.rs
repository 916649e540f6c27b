//! Debounce scheduler for bursty inputs.
//!
//! Collapses a burst of calls into one: the wrapped callback fires only
//! after a full quiet period. Used by the table for per-column filter text,
//! where every keystroke would otherwise re-run the query pipeline.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Delays a callback until `delay` has elapsed without a newer call.
///
/// At most one timer is pending at any time: `schedule` aborts the previous
/// timer before starting a new one, and only the most recent arguments are
/// ever delivered. Calling `schedule` faster than `delay` indefinitely
/// never invokes the callback.
pub struct Debouncer<T> {
    callback: Arc<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer around a callback.
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
            delay,
            pending: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Record the latest arguments and restart the quiet-period timer.
    pub fn schedule(&mut self, args: T) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let cancel = self.cancel.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(args),
            }
        }));
    }

    /// Change the delay. Applies to the next scheduled timer; a timer
    /// already pending keeps the delay it started with.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a timer is currently pending.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel any pending timer and prevent all further invocations.
    ///
    /// Must be called when the owning component is discarded so the
    /// callback cannot run against torn-down state. Also runs on drop.
    pub fn teardown(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
