//! Control-loop events for follow mode.
//!
//! A background thread blocks on crossterm input for at most one tick and
//! turns silence into `Event::Tick`, so the loop sees one stream.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input arrived within the tick rate.
    Tick,
    /// Key press.
    Key(KeyEvent),
    /// New terminal size (columns, rows).
    Resize(u16, u16),
}

/// Maps a terminal event to a control-loop event.
///
/// Only key presses pass: release and repeat events would refresh a second
/// time for the same keystroke. Mouse, focus and paste events are dropped.
fn translate(evt: CrosstermEvent) -> Option<Event> {
    match evt {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

pub struct EventHandler {
    rx: Receiver<Event>,
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Spawns the input thread. It exits once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let next = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read().ok().and_then(translate) {
                        Some(event) => event,
                        None => continue,
                    }
                } else {
                    Event::Tick
                };
                if event_tx.send(next).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind};

    fn key_event(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_translate_key_press_only() {
        let press = key_event(KeyEventKind::Press);
        assert_eq!(translate(CrosstermEvent::Key(press)), Some(Event::Key(press)));
        assert_eq!(translate(CrosstermEvent::Key(key_event(KeyEventKind::Release))), None);
        assert_eq!(translate(CrosstermEvent::Key(key_event(KeyEventKind::Repeat))), None);
    }

    #[test]
    fn test_translate_resize_and_others() {
        assert_eq!(
            translate(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize(120, 40))
        );
        assert_eq!(translate(CrosstermEvent::FocusGained), None);

        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(translate(CrosstermEvent::Mouse(mouse)), None);
    }
}
