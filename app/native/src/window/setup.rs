use tauri::webview::PageLoadEvent;
use tauri::{
    AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder, WindowEvent,
};

use super::native::TRANSPARENT;
use super::{NativeWindow, WindowFlags, WindowHandle};
use crate::config::get_config;
use crate::constants::MAIN_WINDOW_LABEL;
use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::host::AppHost;

/// Builds the note window, hands it to the host's window manager, places it
/// near the right edge of the primary work area and shows it.
///
/// Opacity and draggability live in the page, so they are pushed again every
/// time it finishes loading.
///
/// # Errors
///
/// Returns an error if Tauri fails to create the window.
pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<WebviewWindow<R>> {
    let window_config = &get_config().window;

    let url = WebviewUrl::App("index.html".into());
    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, url)
        .title("Pinnote")
        .inner_size(f64::from(DEFAULT_WIDTH), f64::from(DEFAULT_HEIGHT))
        .min_inner_size(f64::from(MIN_WIDTH), f64::from(MIN_HEIGHT))
        .decorations(false)
        .transparent(true)
        .background_color(TRANSPARENT)
        .always_on_top(window_config.always_on_top)
        .resizable(true)
        .shadow(true)
        .visible(false)
        .on_page_load(|window, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                window.state::<AppHost<R>>().window().reapply_flags();
            }
        })
        .build()?;

    let app_handle = app.clone();
    window.on_window_event(move |event| match event {
        WindowEvent::Focused(_) => {
            if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
                if let Err(err) = NativeWindow::new(window).clear_background() {
                    tracing::debug!(error = %err, "failed to clear window background");
                }
            }
        }
        WindowEvent::Destroyed => {
            app_handle.state::<AppHost<R>>().window().detach();
            tracing::debug!("note window destroyed");
        }
        _ => {}
    });

    let host = app.state::<AppHost<R>>();
    let manager = host.window();
    manager.attach(
        NativeWindow::new(window.clone()),
        WindowFlags {
            always_on_top: window_config.always_on_top,
            movable: window_config.draggable,
            opacity: window_config.opacity.clamp(0.0, 1.0),
        },
    );
    manager.reset_position();
    manager.show();

    tracing::info!(size = ?manager.size(), position = ?manager.position(), "note window ready");
    Ok(window)
}
