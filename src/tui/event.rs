//! Event handling for the TUI
//!
//! Reads terminal events (key presses, resizes) using crossterm's event
//! system. Reads block the calling thread until an event arrives.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::io;

/// Terminal events the finder reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Blocking reader for terminal events
#[derive(Debug, Clone, Copy, Default)]
pub struct EventReader;

impl EventReader {
    /// Get the next relevant event (blocking)
    ///
    /// Mouse, focus and paste events are skipped.
    pub fn next(&self) -> io::Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => {}
            }
        }
    }
}
