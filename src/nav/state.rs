//! Navigation state: current directory, its listing and the selection cursor.
//!
//! A [`NavigationState`] is an immutable snapshot. Every transition returns a
//! new state; rejected transitions return a [`Signal`] and the caller keeps
//! the state it already has, so a failed read can never leave the listing
//! out of sync with the path.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::fs::entry::{DirectoryEntry, EntryMeta};
use crate::fs::reader::DirectoryReader;
use crate::nav::signal::Signal;

/// Snapshot of the directory being browsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: PathBuf,
    /// Exactly the last successful read of `current_path`.
    entries: Arc<[DirectoryEntry]>,
    /// Always 0 when `entries` is empty, otherwise `< entries.len()`.
    cursor: usize,
}

impl NavigationState {
    /// Read `path` and build the initial state with the cursor on the first entry.
    pub fn open<R: DirectoryReader>(path: &Path, reader: &R) -> io::Result<Self> {
        let entries = reader.list(path)?;
        Ok(Self::from_listing(path.to_path_buf(), entries, 0))
    }

    fn from_listing(current_path: PathBuf, entries: Vec<DirectoryEntry>, cursor: usize) -> Self {
        let cursor = cursor.min(entries.len().saturating_sub(1));
        Self {
            current_path,
            entries: entries.into(),
            cursor,
        }
    }

    fn with_cursor(&self, cursor: usize) -> Self {
        Self {
            current_path: self.current_path.clone(),
            entries: Arc::clone(&self.entries),
            cursor,
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry under the cursor, if the listing is non-empty.
    pub fn selected(&self) -> Option<&DirectoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Move the cursor by `delta`, clamped to the listing.
    pub fn move_cursor(&self, delta: isize) -> Self {
        let last = self.entries.len().saturating_sub(1);
        self.with_cursor(self.cursor.saturating_add_signed(delta).min(last))
    }

    /// Jump to the first entry.
    pub fn first(&self) -> Self {
        self.with_cursor(0)
    }

    /// Jump to the last entry.
    pub fn last(&self) -> Self {
        self.with_cursor(self.entries.len().saturating_sub(1))
    }

    /// Descend into the selected directory.
    pub fn enter<R: DirectoryReader>(&self, reader: &R) -> Result<Self, Signal> {
        let target = self.selected().ok_or(Signal::NoSelection)?;
        if !target.is_directory {
            return Err(Signal::NotADirectory {
                name: target.display_name().into_owned(),
            });
        }

        let new_path = self.current_path.join(&target.name);
        match reader.list(&new_path) {
            Ok(entries) => Ok(Self::from_listing(new_path, entries, 0)),
            Err(e) => Err(Signal::unreadable(new_path, &e)),
        }
    }

    /// Ascend to the parent directory, selecting the directory just left
    /// when it is still listed there.
    pub fn leave<R: DirectoryReader>(&self, reader: &R) -> Result<Self, Signal> {
        let parent = self.current_path.parent().ok_or(Signal::AtRoot)?;
        let child = self.current_path.file_name();

        match reader.list(parent) {
            Ok(entries) => {
                let cursor = child
                    .and_then(|name| position_of(&entries, name))
                    .unwrap_or(0);
                Ok(Self::from_listing(parent.to_path_buf(), entries, cursor))
            }
            Err(e) => Err(Signal::unreadable(parent.to_path_buf(), &e)),
        }
    }

    /// Re-read the current directory.
    ///
    /// The selection follows the selected entry by name; if it is gone the
    /// old index is kept, clamped to the new listing.
    pub fn refresh<R: DirectoryReader>(&self, reader: &R) -> Result<Self, Signal> {
        match reader.list(&self.current_path) {
            Ok(entries) => {
                let cursor = self
                    .selected()
                    .and_then(|selected| position_of(&entries, &selected.name))
                    .unwrap_or(self.cursor);
                Ok(Self::from_listing(self.current_path.clone(), entries, cursor))
            }
            Err(e) => Err(Signal::unreadable(self.current_path.clone(), &e)),
        }
    }

    /// Describe the selected entry's size and modification time.
    ///
    /// Returns `previous` unchanged when nothing is selected or the
    /// metadata read fails.
    pub fn refresh_metadata<R: DirectoryReader>(
        &self,
        reader: &R,
        previous: Option<String>,
    ) -> Option<String> {
        let Some(entry) = self.selected() else {
            return previous;
        };
        let path = self.current_path.join(&entry.name);
        match reader.metadata(&path) {
            Ok(meta) => Some(format_info(&meta)),
            Err(e) => {
                log::debug!("metadata unavailable for {}: {}", path.display(), e);
                previous
            }
        }
    }
}

/// First entry with the given name.
fn position_of(entries: &[DirectoryEntry], name: &OsStr) -> Option<usize> {
    entries.iter().position(|e| e.name.as_os_str() == name)
}

/// Status line text for an entry's metadata.
pub fn format_info(meta: &EntryMeta) -> String {
    let modified = meta
        .modified
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("Size: {} bytes | Mod: {}", meta.size, modified)
}
