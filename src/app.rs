use std::path::Path;

use crate::error::Result;
use crate::event::{Event, EventSource};
use crate::fs::entry::DirectoryEntry;
use crate::fs::reader::DirectoryReader;
use crate::handler;
use crate::keymap::Command;
use crate::nav::signal::Signal;
use crate::nav::state::NavigationState;
use crate::ui::Renderer;

/// Whether the interaction loop keeps reading events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

/// Read-only view handed to the renderer after every processed event.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub current_path: &'a Path,
    pub entries: &'a [DirectoryEntry],
    pub cursor: usize,
    pub last_signal: Option<&'a Signal>,
    pub info_text: Option<&'a str>,
}

/// Main application state.
pub struct App {
    pub nav: NavigationState,
    pub loop_state: LoopState,
    /// Rejection reported by the most recent command, cleared on success.
    pub last_signal: Option<Signal>,
    /// Size/modification line for the selected entry; may be stale.
    pub info_text: Option<String>,
}

impl App {
    /// Create a new App browsing an already-read directory.
    pub fn new<R: DirectoryReader>(nav: NavigationState, reader: &R) -> Self {
        let info_text = nav.refresh_metadata(reader, None);
        Self {
            nav,
            loop_state: LoopState::Running,
            last_signal: None,
            info_text,
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.loop_state = LoopState::Terminated;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            current_path: self.nav.current_path(),
            entries: self.nav.entries(),
            cursor: self.nav.cursor(),
            last_signal: self.last_signal.as_ref(),
            info_text: self.info_text.as_deref(),
        }
    }

    /// Apply one command to the navigation state.
    pub fn apply<R: DirectoryReader>(&mut self, command: Command, reader: &R) {
        log::debug!("command {:?} in {}", command, self.nav.current_path().display());

        let outcome = match command {
            Command::Quit => {
                self.quit();
                return;
            }
            Command::Up => Ok(self.nav.move_cursor(-1)),
            Command::Down => Ok(self.nav.move_cursor(1)),
            Command::First => Ok(self.nav.first()),
            Command::Last => Ok(self.nav.last()),
            Command::Enter => self.nav.enter(reader),
            Command::Leave => self.nav.leave(reader),
            Command::Refresh => self.nav.refresh(reader),
        };

        match outcome {
            Ok(next) => {
                self.nav = next;
                self.last_signal = None;
            }
            Err(signal) => {
                if signal.is_error() {
                    log::warn!("{}", signal);
                } else {
                    log::debug!("rejected: {}", signal);
                }
                self.last_signal = Some(signal);
            }
        }

        self.info_text = self.nav.refresh_metadata(reader, self.info_text.take());
    }

    /// Drive the read-event, apply, render cycle until the user quits.
    ///
    /// Every processed event is followed by a render, including rejected
    /// commands and unbound keys. Render failures are logged and skipped.
    pub fn run<E, R, D>(&mut self, events: &mut E, reader: &R, renderer: &mut D) -> Result<()>
    where
        E: EventSource,
        R: DirectoryReader,
        D: Renderer,
    {
        self.render(renderer);
        while self.is_running() {
            match events.next()? {
                Event::Key(key) => handler::handle_key_event(self, key, reader),
                Event::Resize(w, h) => log::debug!("resized to {}x{}", w, h),
            }
            if self.is_running() {
                self.render(renderer);
            }
        }
        Ok(())
    }

    fn render<D: Renderer>(&self, renderer: &mut D) {
        if let Err(e) = renderer.render(&self.snapshot()) {
            log::warn!("render failed: {}", e);
        }
    }
}
