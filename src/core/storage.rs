//! Durable key/value storage for planner snapshots
//!
//! The planner writes two independently keyed JSON entries. Backends only move
//! strings; (de)serialization lives in the store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key holding the completed-course list
pub const COMPLETED_KEY: &str = "completedCourses";
/// Storage key holding the term → planned-courses mapping
pub const PLANNED_KEY: &str = "plannedCourses";

/// A synchronous string store keyed by name
pub trait Storage {
    /// Read the entry for `key`; `Ok(None)` when it has never been written
    ///
    /// # Errors
    /// Returns an error if the entry exists but cannot be read.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the entry for `key` with `value`
    ///
    /// # Errors
    /// Returns an error if the entry cannot be written.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per entry inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for entries; it is created on first write
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    #[must_use]
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes to a sibling temp file and renames it over the entry, so a
    /// reader sees either the old or the new snapshot, never a partial one.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.entry_path(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &target)
    }
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail (simulates a full or read-only disk)
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw entry, for inspection
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            ));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        assert_eq!(storage.read(COMPLETED_KEY).unwrap(), None);
        storage.write(COMPLETED_KEY, r#"["PSY 201"]"#).unwrap();
        assert_eq!(
            storage.read(COMPLETED_KEY).unwrap().as_deref(),
            Some(r#"["PSY 201"]"#)
        );
        assert!(storage.entry_path(COMPLETED_KEY).exists());
    }

    #[test]
    fn test_file_storage_overwrites_and_leaves_no_staging_file() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path());

        storage.write(PLANNED_KEY, "{}").unwrap();
        storage.write(PLANNED_KEY, r#"{"Fall 2025":["PSY 202"]}"#).unwrap();

        assert_eq!(
            storage.read(PLANNED_KEY).unwrap().as_deref(),
            Some(r#"{"Fall 2025":["PSY 202"]}"#)
        );
        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["plannedCourses.json"]);
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::with_entries([(COMPLETED_KEY, "[]")]);
        storage.set_fail_writes(true);

        assert!(storage.write(COMPLETED_KEY, r#"["A 1"]"#).is_err());
        assert_eq!(storage.get(COMPLETED_KEY), Some("[]"));

        storage.set_fail_writes(false);
        storage.write(COMPLETED_KEY, r#"["A 1"]"#).unwrap();
        assert_eq!(storage.read(COMPLETED_KEY).unwrap().as_deref(), Some(r#"["A 1"]"#));
    }
}
