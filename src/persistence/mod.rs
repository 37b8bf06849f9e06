//! Loading and debounced saving of the counter value.

mod debounce;

pub use debounce::DebouncedWriter;

use crate::storage::KeyValueStore;

/// Reads the persisted count under `key`.
///
/// A missing, non-numeric or unreadable value yields 0. Only integers are
/// accepted; surrounding whitespace is ignored.
pub fn load_initial_count(store: &dyn KeyValueStore, key: &str) -> i64 {
    match store.get(key) {
        Ok(Some(raw)) => match raw.trim().parse::<i64>() {
            Ok(count) => {
                tracing::debug!(key, count, "Restored persisted count");
                count
            }
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring non-numeric persisted count");
                0
            }
        },
        Ok(None) => 0,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to read persisted count");
            0
        }
    }
}
