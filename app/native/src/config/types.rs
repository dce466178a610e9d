//! Configuration types for Pinnote.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Every key is optional; a missing file means "all defaults".

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{APP_DIR_NAME, NOTES_FILE_NAME};
use crate::platform::path::expand_and_resolve;

/// Initial state of the note window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    /// Keep the window above all other windows.
    pub always_on_top: bool,

    /// Window opacity as a fraction in `[0, 1]`.
    pub opacity: f64,

    /// Whether move gestures are enabled at startup.
    pub draggable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            always_on_top: true,
            opacity: 1.0,
            draggable: true,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinnoteConfig {
    /// Location of the note store. `~` is expanded and relative paths are
    /// resolved against the configuration file's directory.
    ///
    /// Defaults to `notes.json` next to the executable.
    pub notes_path: Option<String>,

    /// Initial window state.
    pub window: WindowConfig,

    /// Global shortcuts, mapping an accelerator (e.g. `"Control+Shift+N"`)
    /// to a host action name (e.g. `"toggle-visibility"`).
    pub shortcuts: BTreeMap<String, String>,
}

impl PinnoteConfig {
    /// Returns the note store location for this configuration.
    ///
    /// `config_path` is the file the configuration was loaded from, if any.
    #[must_use]
    pub fn resolve_notes_path(&self, config_path: Option<&Path>) -> PathBuf {
        let Some(notes_path) = self.notes_path.as_deref().filter(|p| !p.trim().is_empty()) else {
            return default_notes_path();
        };

        let base = config_path
            .and_then(Path::parent)
            .map_or_else(executable_dir, Path::to_path_buf);
        expand_and_resolve(notes_path, &base)
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error("No configuration file found. Expected at ~/.config/pinnote/config.jsonc")]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `~/.config/pinnote/config.jsonc` or `config.json`
/// 2. The platform config directory (`dirs::config_dir()`), same file names
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = dirs::home_dir() {
        let app_dir = home.join(".config").join(APP_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(app_dir.join(filename));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let app_dir = config_dir.join(APP_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(PinnoteConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), load_config_from_path)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, and the I/O or
/// parse variants otherwise.
pub fn load_config_from_path(path: PathBuf) -> Result<(PinnoteConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(&path)?;
    let reader = json_comments::StripComments::new(file);
    let config: PinnoteConfig = serde_json::from_reader(reader)?;
    Ok((config, path))
}

/// Default store location: `notes.json` next to the executable.
#[must_use]
pub fn default_notes_path() -> PathBuf { executable_dir().join(NOTES_FILE_NAME) }

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
