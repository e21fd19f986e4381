//! In-memory [`DirectoryReader`] used by navigation and loop tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::entry::{DirectoryEntry, EntryMeta};
use crate::fs::reader::DirectoryReader;

#[derive(Debug, Default)]
pub struct MemoryReader {
    dirs: HashMap<PathBuf, Vec<DirectoryEntry>>,
    failures: HashMap<PathBuf, io::ErrorKind>,
    meta: HashMap<PathBuf, EntryMeta>,
    reads: RefCell<Vec<PathBuf>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(
        mut self,
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DirectoryEntry>,
    ) -> Self {
        self.set_dir(path, entries);
        self
    }

    pub fn unreadable(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.insert(path.into(), kind);
        self
    }

    pub fn meta(mut self, path: impl Into<PathBuf>, meta: EntryMeta) -> Self {
        self.meta.insert(path.into(), meta);
        self
    }

    /// Replace a directory's contents, simulating an external change.
    pub fn set_dir(
        &mut self,
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DirectoryEntry>,
    ) {
        let path = path.into();
        self.failures.remove(&path);
        self.dirs.insert(path, entries.into_iter().collect());
    }

    /// Make a previously readable directory fail from now on.
    pub fn break_dir(&mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.failures.insert(path.into(), kind);
    }

    /// Paths passed to `list`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }
}

impl DirectoryReader for MemoryReader {
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        self.reads.borrow_mut().push(path.to_path_buf());
        if let Some(kind) = self.failures.get(path) {
            return Err(io::Error::from(*kind));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        self.meta
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
