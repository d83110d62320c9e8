//! Credential storage collaborators.
//!
//! The store only needs `get`/`set` by key. Neither operation fails
//! observably: a value that cannot be read is simply absent.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use log::{debug, warn};

use crate::error::{CoachError, FileResultExt, Result};

/// Key under which the session bearer token is kept.
pub const SESSION_TOKEN_KEY: &str = "coach.session_token";

/// Synchronous string key/value storage for secrets.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Process-local store, mostly for tests and stub sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// JSON file holding a key → value map.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the default credentials path following XDG Base Directory
    /// specification: `$XDG_DATA_HOME/coach/credentials.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("coach")
            .place_data_file("credentials.json")
            .map_err(|e| CoachError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path).at_path(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }
        let raw = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, raw).at_path(&self.path)
    }

    fn try_set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.read_all().unwrap_or_else(|e| {
            warn!("Replacing unreadable credentials file: {e}");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut values) => values.remove(key),
            Err(e) => {
                warn!("Treating credential '{key}' as absent: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self.try_set(key, value) {
            Ok(()) => debug!("Stored credential '{key}'"),
            Err(e) => warn!("Failed to store credential '{key}': {e}"),
        }
    }
}
