//! Shared busy indicator.
//!
//! Visibility follows a counter of outstanding calls: the indicator is shown
//! when the count leaves zero and hidden when it returns to zero. Each call
//! holds a [`BusyGuard`]; dropping the guard releases the slot, so the count
//! is restored on success, failure, and when an in-flight future is dropped.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Something that can display "work in progress".
pub trait BusyIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Indicator that only logs its transitions.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogIndicator;

impl BusyIndicator for LogIndicator {
    fn show(&self) {
        debug!("Busy indicator shown");
    }

    fn hide(&self) {
        debug!("Busy indicator hidden");
    }
}

struct Inner {
    outstanding: Mutex<usize>,
    indicator: Arc<dyn BusyIndicator>,
}

/// Counter of outstanding calls driving one indicator. Clones share state.
#[derive(Clone)]
pub struct BusyCounter {
    inner: Arc<Inner>,
}

impl BusyCounter {
    pub fn new(indicator: Arc<dyn BusyIndicator>) -> Self {
        Self {
            inner: Arc::new(Inner {
                outstanding: Mutex::new(0),
                indicator,
            }),
        }
    }

    /// Counter backed by [`LogIndicator`].
    pub fn logging() -> Self {
        Self::new(Arc::new(LogIndicator))
    }

    /// Register one outstanding call.
    pub fn acquire(&self) -> BusyGuard {
        let mut count = self.lock();
        *count += 1;
        if *count == 1 {
            self.inner.indicator.show();
        }
        BusyGuard {
            counter: self.clone(),
        }
    }

    /// Number of calls currently outstanding.
    pub fn outstanding(&self) -> usize {
        *self.lock()
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding() > 0
    }

    fn release(&self) {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.inner.indicator.hide();
        }
    }

    // A panicking indicator must not wedge the counter.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.inner
            .outstanding
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BusyCounter {
    fn default() -> Self {
        Self::logging()
    }
}

/// One outstanding call. Releases its slot on drop.
#[must_use = "the call is only counted while the guard is alive"]
pub struct BusyGuard {
    counter: BusyCounter,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.counter.release();
    }
}
