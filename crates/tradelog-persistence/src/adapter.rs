//! Durable settings storage behind the `PersistenceAdapter` trait.
//!
//! Storage is fire-and-forget:
//! - `load` returns `None` for anything it cannot read (missing file,
//!   malformed JSON, IO failure) so callers fall back to defaults
//! - `save` writes the full blob and swallows failures after logging
//! - no retries, last write wins
//!
//! `JsonFileAdapter` keeps one JSON object in a single fixed file. The
//! fallible `try_load`/`try_save` pair is exposed for diagnostics (the CLI
//! uses it to report a corrupt blob instead of silently defaulting).

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tradelog_core::Settings;

use crate::error::PersistenceResult;

const SETTINGS_FILE: &str = "settings.json";
const CONFIG_DIR_ENV: &str = "TRADELOG_CONFIG_DIR";

/// Durable storage for the settings blob.
///
/// Implementations never propagate storage failures to the store: `load`
/// degrades to `None` and `save` logs and returns.
pub trait PersistenceAdapter: Send + Sync {
    /// Read the persisted settings, or `None` if nothing usable is stored.
    fn load(&self) -> Option<Settings>;

    /// Write the full settings blob, replacing any previous one.
    fn save(&self, settings: &Settings);
}

/// Resolve the directory holding the settings file.
fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".config").join("tradelog"),
        Err(_) => PathBuf::from("."),
    }
}

/// Default settings file location: `$TRADELOG_CONFIG_DIR/settings.json` if
/// the variable is set, else `$HOME/.config/tradelog/settings.json`.
pub fn default_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

/// File-backed adapter storing one JSON object at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    /// Create an adapter for the given settings file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the settings file.
    ///
    /// A missing file is `Ok(None)`; unreadable or malformed content is an
    /// error so diagnostics can distinguish "never saved" from "corrupt".
    pub fn try_load(&self) -> PersistenceResult<Option<Settings>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    /// Serialize and write the full blob, creating parent directories.
    pub fn try_save(&self, settings: &Settings) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn load(&self) -> Option<Settings> {
        match self.try_load() {
            Ok(Some(settings)) => {
                debug!(path = %self.path.display(), "Loaded settings file");
                Some(settings)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(?e, path = %self.path.display(), "Failed to load settings, using defaults");
                None
            }
        }
    }

    fn save(&self, settings: &Settings) {
        if let Err(e) = self.try_save(settings) {
            warn!(?e, path = %self.path.display(), "Failed to save settings");
        }
    }
}
