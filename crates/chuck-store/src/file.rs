//! # File-Backed Storage Facility
//!
//! All keys live in one JSON object file:
//!
//! ```json
//! { "chuckNorrisJokes": "[{\"id\":\"a1\",\"value\":\"...\"}]" }
//! ```
//!
//! Values are opaque strings, exactly as a browser's `localStorage` holds
//! them. Writes go to a temp file in the same directory and are renamed over
//! the target, so a reader sees either the old map or the new one.
//!
//! [`KeyValueStore::lock`] takes an advisory lock (`fs2`) on a sidecar
//! `<file>.lock`. The facility file itself is replaced on every write, so it
//! cannot carry the lock. Separate processes, and separate
//! `FileKeyValueStore` values on the same path, wait for each other there.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::facility::{FacilityLock, KeyValueStore};

/// Directory name under the platform data dir.
const APP_DIR: &str = "chuck";

/// File name of the facility file.
const FILE_NAME: &str = "storage.json";

/// Fallback when the platform has no data dir.
const FALLBACK_FILE: &str = "chuck-storage.json";

/// A [`KeyValueStore`] persisted to a single JSON file.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write of the file within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (lazily) the facility at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<data_local_dir>/chuck/storage.json`, or `./chuck-storage.json` on
    /// platforms without a data dir.
    pub fn default_path() -> PathBuf {
        match dirs::data_local_dir() {
            Some(dir) => dir.join(APP_DIR).join(FILE_NAME),
            None => PathBuf::from(FALLBACK_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the whole map. `Ok(None)` if the file does not exist yet.
    fn read_map(&self) -> Result<Option<BTreeMap<String, String>>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })
    }

    /// Directory holding the facility file, created if missing.
    fn ensure_dir(&self) -> Result<PathBuf, StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.io_err(e))?;
        Ok(dir)
    }

    /// `<path><suffix>`, next to the facility file.
    fn sidecar(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let dir = self.ensure_dir()?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_err(e))?;
        serde_json::to_writer_pretty(&mut tmp, map)?;
        tmp.write_all(b"\n").map_err(|e| self.io_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;
        Ok(())
    }

    /// Move an unreadable facility file aside so a fresh one can be written.
    fn quarantine(&self) -> Result<PathBuf, StoreError> {
        let target = self.sidecar(".corrupt");
        std::fs::rename(&self.path, &target).map_err(|e| self.io_err(e))?;
        Ok(target)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.and_then(|mut map| map.remove(key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();

        let mut map = match self.read_map() {
            Ok(map) => map.unwrap_or_default(),
            Err(StoreError::Corrupt { reason, .. }) => {
                let moved_to = self.quarantine()?;
                tracing::warn!(
                    path = %self.path.display(),
                    moved_to = %moved_to.display(),
                    "storage file unreadable ({reason}); starting a fresh one"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn lock(&self) -> Result<FacilityLock, StoreError> {
        self.ensure_dir()?;
        let lock_path = self.sidecar(".lock");
        let lock_err = |source| StoreError::Io {
            path: lock_path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;
        tracing::trace!(path = %lock_path.display(), "storage lock acquired");
        Ok(FacilityLock::file(file))
    }
}
