use std::fs;
use std::io;
use std::path::Path;

use crate::fs::entry::{DirectoryEntry, EntryMeta};

/// Read-only access to directory listings and file metadata.
///
/// Navigation goes through this trait so that tests can substitute an
/// in-memory listing for the real filesystem.
pub trait DirectoryReader {
    /// List the immediate children of `path`.
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// Read size and modification time of `path`.
    fn metadata(&self, path: &Path) -> io::Result<EntryMeta>;
}

/// [`DirectoryReader`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    /// Entries are sorted by name (byte order). Children that vanish or
    /// fail mid-iteration are skipped.
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => entries.push(read_entry(&entry)),
                Err(e) => log::debug!("skipping entry in {}: {}", path.display(), e),
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Follows symlinks; a dangling link reports the link itself.
    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        let metadata = fs::metadata(path).or_else(|_| fs::symlink_metadata(path))?;
        Ok(meta_of(&metadata))
    }
}

fn read_entry(entry: &fs::DirEntry) -> DirectoryEntry {
    let name = entry.file_name();

    let file_type = entry.file_type().ok();
    let is_symlink = file_type.is_some_and(|t| t.is_symlink());
    let is_directory = if is_symlink {
        fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
    } else {
        file_type.is_some_and(|t| t.is_dir())
    };

    DirectoryEntry {
        name,
        is_directory,
        is_symlink,
        meta: entry.metadata().ok().map(|m| meta_of(&m)),
    }
}

fn meta_of(metadata: &fs::Metadata) -> EntryMeta {
    EntryMeta {
        size: metadata.len(),
        modified: metadata.modified().ok(),
    }
}
