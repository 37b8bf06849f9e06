use crate::config::Config;
use crate::persistence::{load_initial_count, DebouncedWriter};
use crate::storage::KeyValueStore;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use std::sync::Arc;
use std::time::Duration;

/// Controls of the widget, in tab order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    Decrement,
    #[default]
    Increment,
    Reset,
    Step,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Decrement, Focus::Increment, Focus::Reset, Focus::Step];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Settings applied when the widget is mounted.
#[derive(Debug, Clone)]
pub struct MountOptions {
    pub storage_key: String,
    pub debounce: Duration,
    pub initial_step: i64,
    pub flush_on_exit: bool,
}

impl From<&Config> for MountOptions {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.counter.storage_key.clone(),
            debounce: Duration::from_millis(config.persistence.debounce_ms),
            initial_step: config.counter.initial_step,
            flush_on_exit: config.persistence.flush_on_exit,
        }
    }
}

impl Default for MountOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The mounted counter widget.
///
/// Owns the counter state (MVI pattern) and the debounced writer (resource,
/// managed outside MVI). Dropping the app cancels any pending write.
pub struct App {
    should_quit: bool,
    focus: Focus,
    counter: CounterState,
    writer: DebouncedWriter,
    flush_on_exit: bool,
}

impl App {
    /// Reads the persisted count and builds the initial state.
    pub fn mount(store: Arc<dyn KeyValueStore>, options: MountOptions) -> Self {
        let initial = load_initial_count(store.as_ref(), &options.storage_key);
        tracing::info!(
            count = initial,
            key = %options.storage_key,
            "Counter mounted"
        );
        Self {
            should_quit: false,
            focus: Focus::default(),
            counter: CounterState::new(initial, options.initial_step),
            writer: DebouncedWriter::new(store, options.storage_key, options.debounce),
            flush_on_exit: options.flush_on_exit,
        }
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True while a write is waiting for the quiet period to pass.
    pub fn save_pending(&self) -> bool {
        self.writer.has_pending()
    }

    /// Applies an intent. A changed count schedules a debounced write.
    pub fn dispatch(&mut self, intent: CounterIntent) {
        let before = self.counter.count;
        tracing::trace!(?intent, "Dispatching counter intent");
        dispatch_mvi!(self, counter, CounterReducer, intent);
        if self.counter.count != before {
            self.writer.schedule(self.counter.count);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Presses the focused button. The step field has no press action.
    pub fn activate_focused(&mut self) {
        let intent = match self.focus {
            Focus::Decrement => CounterIntent::Decrement,
            Focus::Increment => CounterIntent::Increment,
            Focus::Reset => CounterIntent::Reset,
            Focus::Step => return,
        };
        self.dispatch(intent);
    }

    /// Releases the widget's resources. A pending write is dropped unless
    /// `flush_on_exit` is set, in which case it is written now.
    pub fn unmount(&mut self) -> Option<i64> {
        let flushed = if self.flush_on_exit {
            self.writer.flush()
        } else {
            self.writer.cancel();
            None
        };
        tracing::info!(count = self.counter.count, ?flushed, "Counter unmounted");
        flushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Step.next(), Focus::Decrement);
        assert_eq!(Focus::Decrement.prev(), Focus::Step);
        assert_eq!(Focus::Increment.next().prev(), Focus::Increment);
    }

    #[test]
    fn mount_options_follow_config() {
        let mut config = Config::default();
        config.persistence.debounce_ms = 250;
        config.persistence.flush_on_exit = true;
        config.counter.initial_step = 3;
        let options = MountOptions::from(&config);
        assert_eq!(options.debounce, Duration::from_millis(250));
        assert!(options.flush_on_exit);
        assert_eq!(options.initial_step, 3);
        assert_eq!(options.storage_key, "advanced-counter-value");
    }

    #[test]
    fn step_changes_do_not_touch_storage() {
        let store = Arc::new(MemoryStore::new());
        let mut app = App::mount(store.clone(), MountOptions::default());
        app.dispatch(CounterIntent::SetStep("4".to_string()));
        assert_eq!(app.counter().step, 4);
        assert!(!app.save_pending());
    }
}
