use crossterm::event::KeyEvent;

use crate::app::App;
use crate::fs::reader::DirectoryReader;
use crate::keymap;

/// Handle a key event. Unbound keys are ignored.
pub fn handle_key_event<R: DirectoryReader>(app: &mut App, key: KeyEvent, reader: &R) {
    match keymap::lookup(&key) {
        Some(command) => app.apply(command, reader),
        None => log::trace!("unbound key {:?}", key.code),
    }
}
