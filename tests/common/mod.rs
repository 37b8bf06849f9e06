//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use advanced_counter::config::DEFAULT_STORAGE_KEY;
use advanced_counter::storage::MemoryStore;
use advanced_counter::ui::app::{App, MountOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

pub const KEY: &str = DEFAULT_STORAGE_KEY;
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Mount a counter on `store` with default options.
pub fn mount_app(store: &Arc<MemoryStore>) -> App {
    App::mount(store.clone(), MountOptions::default())
}

/// Mount a counter on `store`, flushing the pending write on unmount.
pub fn mount_app_flushing(store: &Arc<MemoryStore>) -> App {
    let options = MountOptions {
        flush_on_exit: true,
        ..MountOptions::default()
    };
    App::mount(store.clone(), options)
}

/// Store holding a previously persisted count.
pub fn store_with(value: &str) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_value(KEY, value))
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn release_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Written (key, value) pairs, for comparing against `MemoryStore::writes`.
pub fn written(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|value| (KEY.to_string(), value.to_string()))
        .collect()
}

/// Let the debounce window elapse (tokio clock must be paused).
pub async fn wait_past_debounce() {
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(1)).await;
}
