use crate::config::Config;
use crate::storage::KeyValueStore;
use crate::ui::app::{App, MountOptions};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Mounts the counter, runs it until the user quits, then unmounts it.
pub async fn run(config: &Config, store: Arc<dyn KeyValueStore>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::mount(store, MountOptions::from(config));
    let mut events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
            }
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Some(AppEvent::Tick) => {}
            None => break,
        }
    }

    app.unmount();
    drop(events);
    drop(guard);
    Ok(())
}
