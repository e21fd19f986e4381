use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Non-fatal outcome of a rejected navigation command.
///
/// Signals never change navigation state; they are shown in the status bar
/// until the next successful command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Signal {
    /// The listing is empty, so there is nothing to act on.
    #[error("Nothing selected")]
    NoSelection,

    /// The selected entry is not a directory.
    #[error("{name} is not a directory")]
    NotADirectory { name: String },

    /// Already at the filesystem root.
    #[error("Already at the root directory")]
    AtRoot,

    /// The target directory could not be listed.
    #[error("Cannot open {}: {cause}", path.display())]
    DirectoryUnreadable { path: PathBuf, cause: io::ErrorKind },
}

impl Signal {
    pub fn unreadable(path: PathBuf, err: &io::Error) -> Self {
        Signal::DirectoryUnreadable {
            path,
            cause: err.kind(),
        }
    }

    /// Whether the signal reports a failure rather than a plain rejection.
    pub fn is_error(&self) -> bool {
        matches!(self, Signal::DirectoryUnreadable { .. })
    }
}
