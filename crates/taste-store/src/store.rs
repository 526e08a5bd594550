//! Profile persistence seam and its two backends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fnv::FnvHashMap;
use taste_core::VisualParams;
use thiserror::Error;

/// Failure surfaced by a store backend.
///
/// A missing record is not an error: `get` returns `Ok(None)` and callers
/// substitute the default record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("state file parse: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence seam between the profile service and whatever holds the
/// records. Writes for one identity are serialized by the backend.
pub trait ProfileStore {
    fn get(&self, identity: &str) -> Result<Option<VisualParams>, StoreError>;
    fn put(&self, identity: &str, params: &VisualParams) -> Result<(), StoreError>;
}

/// In-memory backend keyed by identity.
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<FnvHashMap<String, VisualParams>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, identity: &str) -> Result<Option<VisualParams>, StoreError> {
        Ok(self.profiles.lock().unwrap().get(identity).cloned())
    }

    fn put(&self, identity: &str, params: &VisualParams) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(identity.to_string(), params.clone());
        Ok(())
    }
}

/// Whole-map JSON snapshot on disk.
///
/// The file is read on every call and rewritten on every put. That is fine
/// at profile-store scale and keeps the state human-editable; a missing file
/// reads as an empty map.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<FnvHashMap<String, VisualParams>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FnvHashMap::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ProfileStore for JsonFileStore {
    fn get(&self, identity: &str) -> Result<Option<VisualParams>, StoreError> {
        Ok(self.load()?.remove(identity))
    }

    fn put(&self, identity: &str, params: &VisualParams) -> Result<(), StoreError> {
        let mut profiles = self.load()?;
        profiles.insert(identity.to_string(), params.clone());
        fs::write(&self.path, serde_json::to_string_pretty(&profiles)?)?;
        Ok(())
    }
}
