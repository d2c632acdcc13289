//! Persisted add-on options.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error for {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-configurable options.
///
/// `announce` keeps its historical polarity: `true` speaks only the bare
/// verb, `false` appends the content description. Existing user
/// configurations rely on this reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_announce")]
    pub announce: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { announce: true }
    }
}

fn default_announce() -> bool {
    true
}

/// Loads and saves [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user configuration location.
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Platform-specific paths:
    /// - Linux: ~/.config/clipspeak/settings.json
    /// - macOS: ~/Library/Application Support/clipspeak/settings.json
    /// - Windows: %APPDATA%/clipspeak/settings.json
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clipspeak")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings from disk.
    ///
    /// A missing, unreadable or corrupt file yields the defaults; speech
    /// must keep working even when the configuration cannot be read.
    pub fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Settings::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read settings");
                return Settings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse settings");
                Settings::default()
            }
        }
    }

    /// Write settings to disk, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Serialization {
                path: self.path.clone(),
                source: e,
            })?;

        std::fs::write(&self.path, content).map_err(|e| SettingsError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
