//! Host-internal actions.
//!
//! These are what the tray menu and global shortcuts trigger. None of them
//! is reachable from the webview; results travel back to it as events.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use tauri::{AppHandle, Emitter, Manager, Runtime};

use crate::error::PinnoteError;
use crate::events;
use crate::host::AppHost;
use crate::notes::dialog::NativeFileDialog;
use crate::window::{WindowHandle, WindowManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    ToggleVisibility,
    ToggleAlwaysOnTop,
    ToggleDraggable,
    ResetPosition,
    Minimize,
    Close,
    Export,
    Import,
    Quit,
}

impl HostAction {
    /// Every action, in tray menu order.
    pub const ALL: [Self; 9] = [
        Self::ToggleVisibility,
        Self::ToggleAlwaysOnTop,
        Self::ToggleDraggable,
        Self::ResetPosition,
        Self::Minimize,
        Self::Close,
        Self::Export,
        Self::Import,
        Self::Quit,
    ];

    /// Identifier used for tray menu ids and in the `shortcuts` config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggleVisibility => "toggle-visibility",
            Self::ToggleAlwaysOnTop => "toggle-always-on-top",
            Self::ToggleDraggable => "toggle-draggable",
            Self::ResetPosition => "reset-position",
            Self::Minimize => "minimize",
            Self::Close => "close",
            Self::Export => "export",
            Self::Import => "import",
            Self::Quit => "quit",
        }
    }

    /// Tray menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToggleVisibility => "Show/Hide Note",
            Self::ToggleAlwaysOnTop => "Always on Top",
            Self::ToggleDraggable => "Lock Position",
            Self::ResetPosition => "Reset Position",
            Self::Minimize => "Minimize",
            Self::Close => "Close Window",
            Self::Export => "Export Notes...",
            Self::Import => "Import Notes...",
            Self::Quit => "Quit Pinnote",
        }
    }
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for HostAction {
    type Err = PinnoteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PinnoteError::CommandError(format!("unknown action '{name}'")))
    }
}

/// What applying an action to the window produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOutcome {
    Done,
    AlwaysOnTop(bool),
    Draggable(bool),
    /// Not a window action.
    Skipped,
}

/// Applies the window half of `action`.
pub fn apply_to_window<W: WindowHandle>(
    window: &WindowManager<W>,
    action: HostAction,
) -> WindowOutcome {
    match action {
        HostAction::ToggleVisibility => window.toggle_visibility(),
        HostAction::ToggleAlwaysOnTop => {
            return WindowOutcome::AlwaysOnTop(window.toggle_always_on_top());
        }
        HostAction::ToggleDraggable => return WindowOutcome::Draggable(window.toggle_draggable()),
        HostAction::ResetPosition => window.reset_position(),
        HostAction::Minimize => window.minimize(),
        HostAction::Close => window.close(),
        HostAction::Export | HostAction::Import | HostAction::Quit => {
            return WindowOutcome::Skipped;
        }
    }
    WindowOutcome::Done
}

/// Performs `action` against the running app.
pub fn perform<R: Runtime>(app: &AppHandle<R>, action: HostAction) {
    tracing::debug!(%action, "performing host action");

    match action {
        HostAction::Export => spawn_export(app.clone()),
        HostAction::Import => spawn_import(app.clone()),
        HostAction::Quit => {
            tracing::info!("quit requested");
            app.exit(0);
        }
        _ => {
            let host = app.state::<AppHost<R>>();
            match apply_to_window(host.window(), action) {
                WindowOutcome::AlwaysOnTop(on_top) => {
                    emit(app, events::window::ALWAYS_ON_TOP_CHANGED, on_top);
                }
                // The native handle already notified the webview.
                WindowOutcome::Draggable(_) | WindowOutcome::Done | WindowOutcome::Skipped => {}
            }
        }
    }
}

// File pickers block, so transfers run off the main thread.
fn spawn_export<R: Runtime>(app: AppHandle<R>) {
    tauri::async_runtime::spawn_blocking(move || {
        let host = app.state::<AppHost<R>>();
        let dialog = NativeFileDialog::new(app.clone());
        let result = host.export_notes(&dialog, Utc::now().date_naive());

        if let Some(path) = result.path {
            emit(&app, events::notes::EXPORTED, path.display().to_string());
        }
    });
}

fn spawn_import<R: Runtime>(app: AppHandle<R>) {
    tauri::async_runtime::spawn_blocking(move || {
        let host = app.state::<AppHost<R>>();
        let dialog = NativeFileDialog::new(app.clone());
        let result = host.import_notes(&dialog);

        if let Some(notes) = result.notes {
            emit(&app, events::notes::IMPORTED, notes);
        }
    });
}

fn emit<R: Runtime, S: serde::Serialize + Clone>(app: &AppHandle<R>, event: &str, payload: S) {
    if let Err(err) = app.emit(event, payload) {
        tracing::warn!(event, error = %err, "failed to emit event");
    }
}
