use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Terminal event source for the UI task.
///
/// Key events come from crossterm's async stream; the tick keeps the save
/// indicator fresh while no input arrives. Dropping the handler detaches
/// the key listener.
pub struct EventHandler {
    stream: EventStream,
    tick: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            tick,
        }
    }

    /// Next event, or `None` once the terminal input stream has ended.
    pub async fn next(&mut self) -> Option<AppEvent> {
        loop {
            tokio::select! {
                event = self.stream.next() => match event {
                    Some(Ok(Event::Key(key))) => return Some(AppEvent::Key(key)),
                    Some(Ok(Event::Resize(cols, rows))) => return Some(AppEvent::Resize(cols, rows)),
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "Terminal input error");
                        return None;
                    }
                    None => return None,
                },
                _ = self.tick.tick() => return Some(AppEvent::Tick),
            }
        }
    }
}
