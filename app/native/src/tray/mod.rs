//! System tray icon for Pinnote.
//!
//! The tray is the only entry point for actions the webview cannot reach:
//! export, import, always-on-top and the rest of [`HostAction`].

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{AppHandle, Runtime};

use crate::actions::{self, HostAction};

const TRAY_ID: &str = "pinnote-tray";

/// Creates the tray icon and its menu.
///
/// # Errors
///
/// Returns an error if the menu or the tray icon cannot be built.
pub fn init<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<()> {
    let version = MenuItem::with_id(
        app,
        "version",
        format!("Pinnote v{}", env!("CARGO_PKG_VERSION")),
        false,
        None::<&str>,
    )?;
    let separator = PredefinedMenuItem::separator(app)?;

    let menu = Menu::with_items(app, &[&version, &separator])?;
    for action in HostAction::ALL {
        if action == HostAction::Export || action == HostAction::Quit {
            menu.append(&PredefinedMenuItem::separator(app)?)?;
        }
        menu.append(&MenuItem::with_id(app, action.as_str(), action.label(), true, None::<&str>)?)?;
    }

    let mut tray = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip("Pinnote")
        .menu(&menu)
        .show_menu_on_left_click(true)
        .on_menu_event(|app, event| match event.id.0.parse::<HostAction>() {
            Ok(action) => {
                tracing::info!(%action, "tray action");
                actions::perform(app, action);
            }
            Err(err) => tracing::debug!(id = %event.id.0, error = %err, "ignored tray event"),
        });

    if let Some(icon) = app.default_window_icon() {
        tray = tray.icon(icon.clone());
    } else {
        tracing::warn!("missing default window icon, tray will have no icon");
    }

    tray.build(app)?;
    tracing::debug!("system tray initialized");
    Ok(())
}
