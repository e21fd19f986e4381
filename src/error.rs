use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
///
/// Navigation rejections are not errors; see [`crate::nav::signal::Signal`].
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from the terminal or filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization, input or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The directory to browse at startup could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    StartupDirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
