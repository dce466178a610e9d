//! Global shortcuts for Pinnote.
//!
//! Shortcuts come from the `shortcuts` table of the config file, mapping an
//! accelerator to a [`HostAction`] identifier:
//!
//! ```jsonc
//! "shortcuts": {
//!     "Control+Shift+N": "toggle-visibility",
//!     "Control+Shift+T": "toggle-always-on-top"
//! }
//! ```
//!
//! Entries that fail to parse are logged and skipped.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tauri::Runtime;
use tauri_plugin_global_shortcut::{Builder, Shortcut, ShortcutState};

use crate::actions::{self, HostAction};
use crate::config::get_config;

type ShortcutActionMap = Arc<HashMap<Shortcut, HostAction>>;

/// Creates the global-shortcut plugin with all configured shortcuts registered.
pub fn create_hotkey_plugin<R: Runtime>() -> tauri::plugin::TauriPlugin<R> {
    let bindings = parse_bindings(&get_config().shortcuts);

    if bindings.is_empty() {
        return Builder::<R>::new().build();
    }

    let shortcuts: Vec<Shortcut> = bindings.keys().copied().collect();
    let bindings: ShortcutActionMap = Arc::new(bindings);

    let builder = match Builder::<R>::new().with_shortcuts(shortcuts) {
        Ok(builder) => builder,
        Err(err) => {
            tracing::warn!(error = %err, "failed to register global shortcuts");
            return Builder::<R>::new().build();
        }
    };

    tracing::debug!(count = bindings.len(), "global shortcuts registered");

    builder
        .with_handler(move |app, shortcut, event| {
            if event.state != ShortcutState::Pressed {
                return;
            }

            if let Some(&action) = bindings.get(shortcut) {
                tracing::info!(%action, "shortcut action");
                actions::perform(app, action);
            }
        })
        .build()
}

/// Resolves configured accelerators to actions, skipping invalid entries.
fn parse_bindings(config: &BTreeMap<String, String>) -> HashMap<Shortcut, HostAction> {
    let mut bindings = HashMap::new();

    for (accelerator, action_name) in config {
        let action = match action_name.parse::<HostAction>() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(shortcut = %accelerator, error = %err, "ignoring shortcut");
                continue;
            }
        };

        match normalize_shortcut(accelerator).parse::<Shortcut>() {
            Ok(shortcut) => {
                if let Some(previous) = bindings.insert(shortcut, action) {
                    tracing::warn!(shortcut = %accelerator, %previous, %action, "shortcut bound twice");
                }
            }
            Err(err) => {
                tracing::warn!(shortcut = %accelerator, error = %err, "invalid shortcut");
            }
        }
    }

    bindings
}

/// Trims each part of an accelerator and spells out the backtick key.
fn normalize_shortcut(shortcut: &str) -> String {
    shortcut
        .split('+')
        .map(|part| match part.trim() {
            "`" => "Backquote",
            other => other,
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_normalize_shortcut_trims_parts() {
        assert_eq!(normalize_shortcut("Control + Shift + N"), "Control+Shift+N");
        assert_eq!(normalize_shortcut("Alt+K"), "Alt+K");
    }

    #[test]
    fn test_normalize_shortcut_backtick() {
        assert_eq!(normalize_shortcut("Control+`"), "Control+Backquote");
    }

    #[test]
    fn test_parse_bindings_valid() {
        let bindings = parse_bindings(&config(&[
            ("Control+Shift+N", "toggle-visibility"),
            ("Control+Shift+T", "toggle-always-on-top"),
        ]));

        assert_eq!(bindings.len(), 2);
        let shortcut: Shortcut = "Control+Shift+T".parse().unwrap();
        assert_eq!(bindings.get(&shortcut), Some(&HostAction::ToggleAlwaysOnTop));
    }

    #[test]
    fn test_parse_bindings_skips_unknown_actions() {
        let bindings = parse_bindings(&config(&[
            ("Control+Shift+N", "launch-rockets"),
            ("Control+Shift+E", "export"),
        ]));

        assert_eq!(bindings.len(), 1);
        assert!(bindings.values().all(|action| *action == HostAction::Export));
    }

    #[test]
    fn test_parse_bindings_skips_invalid_accelerators() {
        let bindings = parse_bindings(&config(&[("NotAKey+???", "quit")]));
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_parse_bindings_empty() {
        assert!(parse_bindings(&BTreeMap::new()).is_empty());
    }
}
