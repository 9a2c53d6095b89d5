use std::path::PathBuf;

use uuid::Uuid;

use crate::entry::Entry;
use crate::error::{ChangelogError, Result};
use crate::fs::FileSystem;

/// Directory-backed collection of pending changelog entry files.
pub struct EntryStore<'a> {
    fs: &'a dyn FileSystem,
    dir: PathBuf,
}

impl<'a> EntryStore<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: impl Into<PathBuf>) -> Self {
        Self { fs, dir: dir.into() }
    }

    /// Paths of all pending entry files, sorted by file name so
    /// discovery order doesn't depend on the platform's readdir order.
    ///
    /// A missing directory is an error, not an empty listing; callers
    /// distinguish "directory missing" from "directory empty".
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.fs.exists(&self.dir) {
            return Err(ChangelogError::DirectoryNotFound(self.dir.clone()));
        }

        let mut paths = self.fs.list_dir(&self.dir)?;
        paths.sort();
        Ok(paths)
    }

    /// Reads and parses every pending entry. A single malformed file
    /// aborts the whole load; a release must not silently drop one
    /// contributor's entry.
    pub fn load_all(&self) -> Result<Vec<(PathBuf, Entry)>> {
        let mut entries = Vec::new();

        for path in self.list()? {
            let contents = self.fs.read_to_string(&path)?;
            let entry = Entry::parse(&contents, &path)?;
            entries.push((path, entry));
        }

        Ok(entries)
    }

    /// Best-effort removal; returns the per-path failures instead of
    /// aborting on the first one.
    pub fn delete_all(&self, paths: &[PathBuf]) -> Vec<(PathBuf, std::io::Error)> {
        let mut failures = Vec::new();

        for path in paths {
            if let Err(err) = self.fs.remove_file(path) {
                failures.push((path.clone(), err));
            }
        }

        failures
    }

    /// Writes `entry` under a freshly generated unique file name and
    /// returns its path. Never overwrites an existing file.
    pub fn write(&self, entry: &Entry) -> Result<PathBuf> {
        let path = self.unique_entry_path();
        if self.fs.exists(&path) {
            return Err(ChangelogError::EntryFileExists(path));
        }

        self.fs.write(&path, &entry.serialize())?;
        Ok(path)
    }

    /// A UUID-named `.md` path inside the store's directory.
    pub fn unique_entry_path(&self) -> PathBuf {
        self.dir.join(format!("{}.md", Uuid::new_v4()))
    }
}
