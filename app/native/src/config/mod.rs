//! Configuration module for Pinnote.
//!
//! The configuration file supports JSONC format (JSON with comments) and is
//! entirely optional: without it the host runs with built-in defaults.

pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, PinnoteConfig, WindowConfig, config_paths, default_notes_path,
    load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<PinnoteConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> PinnoteConfig {
    match load_config_default() {
        Ok((config, path)) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file, using defaults");
            PinnoteConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            PinnoteConfig::default()
        }
    }
}

/// Initializes and returns the global configuration instance.
///
/// This function is idempotent - calling it multiple times will return
/// the same configuration instance.
pub fn init() -> &'static PinnoteConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the global configuration instance, initializing it if necessary.
pub fn get_config() -> &'static PinnoteConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

/// Returns the note store location for the active configuration.
#[must_use]
pub fn notes_path() -> PathBuf {
    get_config().resolve_notes_path(get_config_path().map(PathBuf::as_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_is_stable() {
        let first: *const PinnoteConfig = get_config();
        let second: *const PinnoteConfig = init();
        assert_eq!(first, second);
    }

    #[test]
    fn test_notes_path_is_not_empty() {
        assert!(!notes_path().as_os_str().is_empty());
    }
}
