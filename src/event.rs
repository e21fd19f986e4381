use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::error::{AppError, Result};

/// Input events consumed by the interaction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// A blocking source of input events, one at a time.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next(&mut self) -> Result<Event>;
}

/// [`EventSource`] reading from the terminal via crossterm.
///
/// Key releases and repeats, mouse, focus and paste events are skipped.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self) -> Result<Event> {
        loop {
            match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => {}
            }
        }
    }
}
