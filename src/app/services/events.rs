#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind, MouseEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::{Input, Key};

/// Merges terminal input with events posted by background services.
pub struct EventService {
    crossterm_events: EventStream,
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl EventService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.event_rx.recv() => event,
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => map_crossterm(input),
                    Some(Err(err)) => {
                        log::warn!("Failed to read terminal event: {}", err);
                        None
                    }
                    None => None
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        Self {
            crossterm_events: EventStream::new(),
            event_rx,
            event_tx,
        }
    }
}

pub(crate) fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(Event::UiUp),
            MouseEventKind::ScrollDown => Some(Event::UiDown),
            _ => None,
        },
        CrosstermEvent::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }

            let input: Input = key_event.into();
            if input.ctrl {
                return match input.key {
                    Key::Char('q') => Some(Event::Quit),
                    Key::Char('c') => Some(Event::KeyboardCtrlC),
                    _ => None,
                };
            }

            match input.key {
                Key::Esc => Some(Event::KeyboardEsc),
                Key::Enter => Some(Event::KeyboardEnter),
                Key::Tab => Some(Event::KeyboardTab),
                Key::Up => Some(Event::UiUp),
                Key::Down => Some(Event::UiDown),
                _ => Some(Event::KeyboardCharInput(input)),
            }
        }
        _ => None,
    }
}
