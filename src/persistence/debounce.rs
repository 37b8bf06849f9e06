//! Debounced writer for the counter value.
//!
//! Each [`DebouncedWriter::schedule`] replaces the pending write, so at most
//! one write is outstanding and only the latest value ever reaches storage.
//! The write itself runs on a tokio task that sleeps for the quiescence
//! period and then hands the storage call to the blocking pool; cancelling
//! aborts the task before it claims the write.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::storage::KeyValueStore;

struct PendingWrite {
    value: i64,
    /// Set by whichever side (timer task, flush, cancel) settles the write first.
    claimed: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl PendingWrite {
    fn claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::SeqCst)
    }
}

pub struct DebouncedWriter {
    store: Arc<dyn KeyValueStore>,
    key: Arc<str>,
    delay: Duration,
    pending: Option<PendingWrite>,
}

impl DebouncedWriter {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<Arc<str>>, delay: Duration) -> Self {
        Self {
            store,
            key: key.into(),
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to be written once `delay` passes without another
    /// call. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: i64) {
        self.cancel();

        let claimed = Arc::new(AtomicBool::new(false));
        let task_claimed = Arc::clone(&claimed);
        let store = Arc::clone(&self.store);
        let key = Arc::clone(&self.key);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if task_claimed.swap(true, Ordering::SeqCst) {
                return;
            }
            // Storage I/O may block on a file lock; keep it off the workers.
            let write = tokio::task::spawn_blocking(move || {
                write_value(store.as_ref(), &key, value);
            });
            if let Err(err) = write.await {
                tracing::warn!(value, error = %err, "Storage write task failed");
            }
        });

        tracing::trace!(value, delay_ms = delay.as_millis() as u64, "Scheduled write");
        self.pending = Some(PendingWrite {
            value,
            claimed,
            handle,
        });
    }

    /// Value waiting to be written, if the timer has not fired yet.
    pub fn pending_value(&self) -> Option<i64> {
        self.pending
            .as_ref()
            .filter(|pending| !pending.claimed.load(Ordering::SeqCst))
            .map(|pending| pending.value)
    }

    pub fn has_pending(&self) -> bool {
        self.pending_value().is_some()
    }

    /// Drops the pending write without writing it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            if pending.claim() {
                tracing::trace!(value = pending.value, "Cancelled pending write");
            }
            pending.handle.abort();
        }
    }

    /// Writes the pending value now instead of waiting for the timer.
    /// Returns the value written, if any.
    pub fn flush(&mut self) -> Option<i64> {
        let pending = self.pending.take()?;
        pending.handle.abort();
        if !pending.claim() {
            return None;
        }
        write_value(self.store.as_ref(), &self.key, pending.value);
        Some(pending.value)
    }
}

impl Drop for DebouncedWriter {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn write_value(store: &dyn KeyValueStore, key: &str, value: i64) {
    match store.set(key, &value.to_string()) {
        Ok(()) => tracing::debug!(key, value, "Persisted count"),
        Err(err) => tracing::warn!(key, value, error = %err, "Failed to persist count"),
    }
}
