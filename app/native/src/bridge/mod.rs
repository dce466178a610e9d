//! The webview bridge.
//!
//! The webview is untrusted. It reaches the host only through the six
//! operations below; everything else the host can do (export, import,
//! always-on-top, visibility, ...) is driven from the tray and global
//! shortcuts.
//!
//! The six names live in [`BRIDGE_COMMANDS`], which the build script also
//! reads to declare the app's command manifest, so Tauri's ACL rejects
//! anything else. At runtime [`guard`] checks every invoke against
//! [`BridgeMethod`] before it reaches the registered handlers.

pub mod commands;
mod names;

use std::fmt;
use std::str::FromStr;

use tauri::Runtime;
use tauri::ipc::Invoke;

pub use names::BRIDGE_COMMANDS;

use crate::error::PinnoteError;
use crate::host::Host;
use crate::notes::{NoteStore, WriteResult};
use crate::window::{Position, WindowHandle};

/// Operations the webview may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeMethod {
    ReadNotes,
    WriteNotes,
    SetWindowSize,
    SetWindowPosition,
    GetWindowPosition,
    FocusWindow,
}

impl BridgeMethod {
    pub const ALL: [Self; 6] = [
        Self::ReadNotes,
        Self::WriteNotes,
        Self::SetWindowSize,
        Self::SetWindowPosition,
        Self::GetWindowPosition,
        Self::FocusWindow,
    ];

    /// Command name as invoked from the webview.
    #[must_use]
    pub const fn command(self) -> &'static str { BRIDGE_COMMANDS[self as usize] }

    /// Capability permission that grants the command.
    #[must_use]
    pub fn permission(self) -> String { format!("allow-{}", self.command().replace('_', "-")) }
}

impl fmt::Display for BridgeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.command()) }
}

impl FromStr for BridgeMethod {
    type Err = PinnoteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.command() == name)
            .ok_or_else(|| PinnoteError::BridgeDenied(name.to_string()))
    }
}

/// Checks an invoked command name against the allow-list.
///
/// # Errors
///
/// Returns `PinnoteError::BridgeDenied` for any name outside [`BridgeMethod`].
pub fn admit(command: &str) -> Result<BridgeMethod, PinnoteError> {
    command.parse::<BridgeMethod>().inspect_err(|err| {
        tracing::warn!(command, error = %err, "rejected webview call");
    })
}

/// Wraps the app's invoke handler so only [`BridgeMethod`] commands are
/// dispatched; anything else is rejected with `BridgeDenied`.
pub fn guard<R, F>(handler: F) -> impl Fn(Invoke<R>) -> bool + Send + Sync + 'static
where
    R: Runtime,
    F: Fn(Invoke<R>) -> bool + Send + Sync + 'static,
{
    move |invoke: Invoke<R>| {
        let admitted = admit(invoke.message.command());
        match admitted {
            Ok(_) => handler(invoke),
            Err(err) => {
                invoke.resolver.reject(err);
                true
            }
        }
    }
}

/// The webview's view of the host.
pub struct Bridge<'a, W: WindowHandle> {
    host: &'a Host<W>,
}

impl<'a, W: WindowHandle> Bridge<'a, W> {
    pub const fn new(host: &'a Host<W>) -> Self { Self { host } }

    #[must_use]
    pub fn read_notes(&self) -> NoteStore {
        tracing::trace!(method = %BridgeMethod::ReadNotes, "bridge call");
        self.host.notes().read()
    }

    /// Replaces the store with `payload`. A payload that is not a note
    /// document is reported as a failed write.
    pub fn write_notes(&self, payload: serde_json::Value) -> WriteResult {
        tracing::trace!(method = %BridgeMethod::WriteNotes, "bridge call");
        match NoteStore::from_value(payload) {
            Ok(notes) => self.host.notes().write(&notes),
            Err(err) => {
                tracing::warn!(error = %err, "rejected note payload");
                WriteResult::failed(&err)
            }
        }
    }

    pub fn set_window_size(&self, width: f64, height: f64) {
        tracing::trace!(method = %BridgeMethod::SetWindowSize, width, height, "bridge call");
        self.host.window().set_size(width, height);
    }

    pub fn set_window_position(&self, x: f64, y: f64) {
        tracing::trace!(method = %BridgeMethod::SetWindowPosition, x, y, "bridge call");
        self.host.window().set_position(x, y);
    }

    #[must_use]
    pub fn get_window_position(&self) -> Position {
        tracing::trace!(method = %BridgeMethod::GetWindowPosition, "bridge call");
        self.host.window().position()
    }

    pub fn focus_window(&self) {
        tracing::trace!(method = %BridgeMethod::FocusWindow, "bridge call");
        self.host.window().focus();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::notes::{NoteContent, NoteRepository};
    use crate::window::WindowFlags;
    use crate::window::fake::FakeWindow;

    fn host_in(dir: &tempfile::TempDir) -> (Host<FakeWindow>, FakeWindow) {
        let host = Host::new(NoteRepository::new(dir.path().join("notes.json")));
        let window = FakeWindow::default();
        host.window().attach(window.clone(), WindowFlags::default());
        (host, window)
    }

    fn handler_list(source: &str) -> Vec<String> {
        let start = source.find("generate_handler![").unwrap() + "generate_handler![".len();
        let end = start + source[start..].find(']').unwrap();
        source[start..end]
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.rsplit("::").next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn command_names_follow_declaration_order() {
        let names: Vec<_> = BridgeMethod::ALL.iter().map(|m| m.command()).collect();
        assert_eq!(names, BRIDGE_COMMANDS);
    }

    #[test]
    fn build_script_reads_the_shared_command_list() {
        let build = include_str!("../../build.rs");
        assert!(build.contains(r#"include!("src/bridge/names.rs")"#));
        assert!(build.contains(".commands(BRIDGE_COMMANDS)"));
    }

    #[test]
    fn registered_handlers_match_bridge_methods() {
        let registered = handler_list(include_str!("../lib.rs"));
        let expected: Vec<_> = BridgeMethod::ALL.iter().map(|m| m.command().to_string()).collect();
        assert_eq!(registered, expected);
    }

    #[test]
    fn admit_accepts_only_bridge_commands() {
        assert_eq!(admit("focus_window").unwrap(), BridgeMethod::FocusWindow);
        assert!(matches!(admit("export_notes"), Err(PinnoteError::BridgeDenied(name)) if name == "export_notes"));
    }

    #[test]
    fn exactly_six_methods_are_exposed() {
        let names: BTreeSet<_> = BridgeMethod::ALL.iter().map(|m| m.command()).collect();
        assert_eq!(names.len(), 6);
        for method in BridgeMethod::ALL {
            assert_eq!(method.command().parse::<BridgeMethod>().unwrap(), method);
        }
    }

    #[test]
    fn host_internal_operations_are_rejected() {
        for name in [
            "export_notes",
            "import_notes",
            "toggle_always_on_top",
            "minimize_window",
            "close_window",
            "hide_window",
            "show_window",
            "get_window_size",
            "get_screen_size",
            "set_window_opacity",
            "set_window_draggable",
            "get_window_state",
            "quit_app",
            "readNotes",
            "",
        ] {
            let err = name.parse::<BridgeMethod>().unwrap_err();
            assert!(matches!(err, PinnoteError::BridgeDenied(_)), "{name} was accepted");
        }
    }

    #[test]
    fn permissions_follow_tauri_naming() {
        assert_eq!(BridgeMethod::ReadNotes.permission(), "allow-read-notes");
        assert_eq!(BridgeMethod::GetWindowPosition.permission(), "allow-get-window-position");
    }

    #[test]
    fn capability_grants_only_bridge_commands() {
        let raw = include_str!("../../capabilities/default.json");
        let capability: serde_json::Value = serde_json::from_str(raw).unwrap();

        let granted: BTreeSet<String> = capability["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p.as_str())
            .filter(|p| !p.starts_with("core:"))
            .map(ToString::to_string)
            .collect();
        let expected: BTreeSet<String> = BridgeMethod::ALL.iter().map(|m| m.permission()).collect();

        assert_eq!(granted, expected);
    }

    #[test]
    fn notes_round_trip_through_bridge() {
        let dir = tempfile::tempdir().unwrap();
        let (host, _window) = host_in(&dir);
        let bridge = host.bridge();

        assert!(bridge.read_notes().is_empty());

        let payload = serde_json::json!({ "main": "remember the milk", "tags": ["a"], "pinned": true });
        assert!(bridge.write_notes(payload.clone()).success);
        assert_eq!(serde_json::to_value(bridge.read_notes()).unwrap(), payload);
    }

    #[test]
    fn malformed_payload_is_a_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        let (host, _window) = host_in(&dir);
        let bridge = host.bridge();
        assert!(bridge.write_notes(serde_json::json!({ "main": "keep" })).success);

        for payload in [serde_json::json!(["not", "a", "map"]), serde_json::json!("text"), serde_json::Value::Null] {
            let result = bridge.write_notes(payload);
            assert!(!result.success);
            assert!(result.error.is_some_and(|e| e.starts_with("Parse error")));
        }
        assert_eq!(bridge.read_notes().get("main"), Some(&NoteContent::from("keep")));
    }

    #[test]
    fn window_geometry_through_bridge() {
        let dir = tempfile::tempdir().unwrap();
        let (host, window) = host_in(&dir);
        let bridge = host.bridge();

        bridge.set_window_position(10.6, 20.2);
        assert_eq!(bridge.get_window_position(), Position::new(11, 20));

        bridge.set_window_size(280.0, 320.0);
        let state = window.snapshot();
        assert_eq!(state.size, crate::window::Size::new(280, 320));
        assert!(state.focused);
    }

    #[test]
    fn focus_window_clears_background() {
        let dir = tempfile::tempdir().unwrap();
        let (host, window) = host_in(&dir);

        host.bridge().focus_window();
        assert_eq!(window.snapshot().background_clears, 1);
    }

    #[test]
    fn bridge_without_window_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let host: Host<FakeWindow> = Host::new(NoteRepository::new(dir.path().join("notes.json")));
        let bridge = host.bridge();

        bridge.set_window_size(100.0, 100.0);
        bridge.set_window_position(5.0, 5.0);
        bridge.focus_window();
        assert_eq!(bridge.get_window_position(), Position::new(0, 0));
    }
}
