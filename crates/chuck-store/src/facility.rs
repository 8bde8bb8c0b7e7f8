//! # Storage Facility
//!
//! The key-value seam the repository writes through. Implementations must
//! make each `set_item` a single all-or-nothing replacement of the value.
//!
//! A read-modify-write (load the collection, change it, save it) spans two
//! calls. Callers that need it to be atomic take [`KeyValueStore::lock`]
//! first and hold the returned [`FacilityLock`] until the save is done.
//! Every user of the same facility, in this process or another, waits for
//! it.

use std::collections::HashMap;
use std::fs::File;
use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex, RwLock};

use crate::error::StoreError;

/// A string-keyed, string-valued storage facility.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Take exclusive use of the facility, blocking until it is free.
    ///
    /// The default holds nothing, for facilities no one else can reach.
    fn lock(&self) -> Result<FacilityLock, StoreError> {
        Ok(FacilityLock::unshared())
    }
}

/// Exclusive use of a facility. Released on drop.
#[must_use = "the facility is released as soon as the lock is dropped"]
pub struct FacilityLock {
    held: Held,
}

enum Held {
    Nothing,
    Process(ArcMutexGuard<RawMutex, ()>),
    File(File),
}

impl FacilityLock {
    /// A lock that excludes no one.
    pub fn unshared() -> Self {
        Self { held: Held::Nothing }
    }

    /// Hold `mutex` until drop.
    pub fn process(mutex: &Arc<Mutex<()>>) -> Self {
        Self {
            held: Held::Process(mutex.lock_arc()),
        }
    }

    /// Hold an already-acquired advisory lock on `file` until drop.
    pub(crate) fn file(file: File) -> Self {
        Self {
            held: Held::File(file),
        }
    }
}

impl Drop for FacilityLock {
    fn drop(&mut self) {
        if let Held::File(file) = &self.held {
            if let Err(e) = fs2::FileExt::unlock(file) {
                tracing::debug!("releasing storage lock failed: {e}");
            }
        }
    }
}

impl std::fmt::Debug for FacilityLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held = match self.held {
            Held::Nothing => "nothing",
            Held::Process(_) => "process",
            Held::File(_) => "file",
        };
        f.debug_struct("FacilityLock").field("held", &held).finish()
    }
}

/// Thread-safe, cloneable in-memory facility.
///
/// Clones share the same underlying map and the same facility lock. The
/// locks are `parking_lot`, not `tokio::sync`, because they are never held
/// across `.await` points.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    data: Arc<RwLock<HashMap<String, String>>>,
    exclusive: Arc<Mutex<()>>,
}

impl MemoryKeyValueStore {
    /// Create an empty facility.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<FacilityLock, StoreError> {
        Ok(FacilityLock::process(&self.exclusive))
    }
}
