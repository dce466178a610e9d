//! Pinnote - an always-on-top sticky note.
//!
//! The host owns the note file and the single frameless note window. The
//! webview renders the note and talks to the host only through the six
//! commands in [`bridge`]; everything else is driven from the tray and
//! global shortcuts.

pub mod actions;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod host;
pub mod logging;
pub mod notes;
pub mod platform;
pub mod window;

mod hotkey;
mod tray;

use tauri::{AppHandle, Manager, RunEvent, Runtime};

use crate::host::AppHost;
use crate::notes::NoteRepository;

/// Runs the Tauri desktop application.
///
/// # Panics
///
/// Panics if Tauri fails to initialize.
pub fn run() {
    logging::init();
    config::init();

    let notes_path = config::notes_path();
    tracing::info!(path = %notes_path.display(), "using note store");

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            tracing::debug!("second instance started, revealing note window");
            app.state::<AppHost>().window().reveal();
        }))
        .plugin(tauri_plugin_dialog::init())
        .plugin(hotkey::create_hotkey_plugin())
        .manage(AppHost::<tauri::Wry>::new(NoteRepository::new(notes_path)))
        .invoke_handler(bridge::guard::<tauri::Wry, _>(tauri::generate_handler![
            bridge::commands::read_notes,
            bridge::commands::write_notes,
            bridge::commands::set_window_size,
            bridge::commands::set_window_position,
            bridge::commands::get_window_position,
            bridge::commands::focus_window,
        ]))
        .setup(|app| {
            hide_from_dock(app.handle());

            let handle = app.handle().clone();
            app.state::<AppHost>()
                .window()
                .set_screen_source(Box::new(move || window::native::primary_work_area(&handle)));

            window::setup::create_main_window(app.handle())?;
            tray::init(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(handle_run_event);
}

// Keeps the note out of the dock and the app switcher.
#[cfg(target_os = "macos")]
fn hide_from_dock<R: Runtime>(app: &AppHandle<R>) {
    if let Err(err) = app.set_activation_policy(tauri::ActivationPolicy::Accessory) {
        tracing::warn!(error = %err, "failed to set activation policy");
    }
}

#[cfg(not(target_os = "macos"))]
const fn hide_from_dock<R: Runtime>(_app: &AppHandle<R>) {}

// On macOS the app outlives its window and brings it back on reactivation.
// Elsewhere closing the window ends the process.
#[cfg(target_os = "macos")]
fn handle_run_event<R: Runtime>(app: &AppHandle<R>, event: RunEvent) {
    match event {
        RunEvent::ExitRequested { code: None, api, .. } => {
            tracing::debug!("last window closed, staying in the tray");
            api.prevent_exit();
        }
        RunEvent::Reopen { .. } => reopen(app),
        _ => {}
    }
}

#[cfg(not(target_os = "macos"))]
fn handle_run_event<R: Runtime>(_app: &AppHandle<R>, event: RunEvent) {
    if let RunEvent::Exit = event {
        tracing::info!("exiting");
    }
}

#[cfg(target_os = "macos")]
fn reopen<R: Runtime>(app: &AppHandle<R>) {
    let host = app.state::<AppHost<R>>();
    if host.window().has_window() {
        host.window().reveal();
    } else if let Err(err) = window::setup::create_main_window(app) {
        tracing::error!(error = %err, "failed to recreate note window");
    }
}
