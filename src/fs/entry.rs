use std::borrow::Cow;
use std::ffi::OsString;
use std::time::SystemTime;

/// Size and modification time of a filesystem object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub size: u64,
    /// `None` when the platform does not report modification times.
    pub modified: Option<SystemTime>,
}

/// One filesystem object inside a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw file name, non-empty and unique within its listing.
    pub name: OsString,
    /// Whether the entry (or, for a symlink, its target) is a directory.
    pub is_directory: bool,
    /// Whether the entry itself is a symbolic link.
    pub is_symlink: bool,
    /// Metadata captured while listing; `None` if it could not be read.
    pub meta: Option<EntryMeta>,
}

impl DirectoryEntry {
    #[cfg(test)]
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            is_symlink: false,
            meta: None,
        }
    }

    #[cfg(test)]
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            is_symlink: false,
            meta: None,
        }
    }

    #[cfg(test)]
    pub fn with_meta(mut self, meta: EntryMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Name for display; bytes that are not valid UTF-8 become U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Dot-prefixed names are rendered dimmed.
    pub fn is_hidden(&self) -> bool {
        self.display_name().starts_with('.')
    }
}
