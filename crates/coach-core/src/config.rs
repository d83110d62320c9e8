//! Runtime settings read by the store and the HTTP gateway.
//!
//! Settings are held behind a shared handle and read at the start of every
//! operation, so flipping stub mode or pointing at another backend takes
//! effect on the next call without rebuilding anything.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, FileResultExt, Result};

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Operating mode and backend location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Produce every plan and reply locally without contacting the backend
    pub use_stub_data: bool,

    /// Base address of the remote data gateway
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_stub_data: true,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::FileSystem` if the file exists but cannot be read
    /// Returns `CoachError::Serialization` if the file is not valid JSON
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).at_path(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).at_path(path)
    }

    /// Returns the default settings path following XDG Base Directory
    /// specification: `$XDG_CONFIG_HOME/coach/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("coach")
            .place_config_file("settings.json")
            .map_err(|e| CoachError::XdgDirectory(e.to_string()))
    }
}

/// Cloneable handle to settings that may change while the store is running.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings(Arc<RwLock<Settings>>);

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        Self(Arc::new(RwLock::new(settings)))
    }

    /// Copy of the settings as they are right now.
    pub fn current(&self) -> Settings {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn use_stub_data(&self) -> bool {
        self.0.read().unwrap_or_else(PoisonError::into_inner).use_stub_data
    }

    pub fn base_url(&self) -> String {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .base_url
            .clone()
    }

    pub fn set_use_stub_data(&self, enabled: bool) {
        self.0.write().unwrap_or_else(PoisonError::into_inner).use_stub_data = enabled;
    }

    /// Points the gateway at another backend.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidInput` if the address is blank
    pub fn set_base_url(&self, base_url: &str) -> Result<()> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(CoachError::invalid_input("base_url").with_reason("must not be empty"));
        }
        self.0.write().unwrap_or_else(PoisonError::into_inner).base_url = trimmed.to_string();
        Ok(())
    }
}

impl From<Settings> for SharedSettings {
    fn from(settings: Settings) -> Self {
        Self::new(settings)
    }
}
