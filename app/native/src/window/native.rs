//! [`WindowHandle`] over a Tauri webview window.
//!
//! Geometry is exchanged in logical pixels so values match what the webview
//! sees regardless of the display scale factor.

use tauri::window::Color;
use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Monitor, Runtime, WebviewWindow, Wry,
};

use super::{NativeState, Position, Size, WindowHandle};
use crate::error::PinnoteError;
use crate::events;

/// Fully transparent RGBA.
pub const TRANSPARENT: Color = Color(0, 0, 0, 0);

pub struct NativeWindow<R: Runtime = Wry>(WebviewWindow<R>);

impl<R: Runtime> NativeWindow<R> {
    pub const fn new(window: WebviewWindow<R>) -> Self { Self(window) }

}

impl<R: Runtime> Clone for NativeWindow<R> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<R: Runtime> WindowHandle for NativeWindow<R> {
    fn position(&self) -> Result<Position, PinnoteError> {
        let scale = self.0.scale_factor()?;
        let position = self.0.outer_position()?.to_logical::<f64>(scale);
        Ok(Position::from_rounded(position.x, position.y))
    }

    fn set_position(&self, position: Position) -> Result<(), PinnoteError> {
        let logical = LogicalPosition::new(f64::from(position.x), f64::from(position.y));
        Ok(self.0.set_position(logical)?)
    }

    fn size(&self) -> Result<Size, PinnoteError> {
        let scale = self.0.scale_factor()?;
        let size = self.0.outer_size()?.to_logical::<f64>(scale);
        Ok(Size::from_rounded(size.width, size.height, Size::new(0, 0)))
    }

    fn set_size(&self, size: Size) -> Result<(), PinnoteError> {
        let logical = LogicalSize::new(f64::from(size.width), f64::from(size.height));
        Ok(self.0.set_size(logical)?)
    }

    fn focus(&self) -> Result<(), PinnoteError> { Ok(self.0.set_focus()?) }

    fn minimize(&self) -> Result<(), PinnoteError> { Ok(self.0.minimize()?) }

    fn unminimize(&self) -> Result<(), PinnoteError> { Ok(self.0.unminimize()?) }

    fn close(&self) -> Result<(), PinnoteError> { Ok(self.0.close()?) }

    fn hide(&self) -> Result<(), PinnoteError> { Ok(self.0.hide()?) }

    fn show(&self) -> Result<(), PinnoteError> { Ok(self.0.show()?) }

    fn native_state(&self) -> Result<NativeState, PinnoteError> {
        Ok(NativeState {
            visible: self.0.is_visible()?,
            minimized: self.0.is_minimized()?,
            maximized: self.0.is_maximized()?,
            focused: self.0.is_focused()?,
        })
    }

    fn set_always_on_top(&self, always_on_top: bool) -> Result<(), PinnoteError> {
        Ok(self.0.set_always_on_top(always_on_top)?)
    }

    // Tauri has no native window alpha; fade the document instead.
    fn set_opacity(&self, opacity: f64) -> Result<(), PinnoteError> {
        Ok(self.0.eval(&format!("document.documentElement.style.opacity = '{opacity}';"))?)
    }

    // Drags start in the webview, so it is told whether to start them.
    fn set_movable(&self, movable: bool) -> Result<(), PinnoteError> {
        Ok(self.0.emit(events::window::DRAGGABLE_CHANGED, movable)?)
    }

    fn clear_background(&self) -> Result<(), PinnoteError> {
        Ok(self.0.set_background_color(Some(TRANSPARENT))?)
    }

    fn work_area(&self) -> Result<Size, PinnoteError> { logical_work_area(self.0.primary_monitor()?) }
}

/// Usable area of the primary display, asked through the app rather than a
/// window so it works while no note window exists.
///
/// # Errors
///
/// Returns `PinnoteError::WindowError` if there is no primary monitor.
pub fn primary_work_area<R: Runtime>(app: &AppHandle<R>) -> Result<Size, PinnoteError> {
    logical_work_area(app.primary_monitor()?)
}

fn logical_work_area(monitor: Option<Monitor>) -> Result<Size, PinnoteError> {
    let monitor =
        monitor.ok_or_else(|| PinnoteError::WindowError("No primary monitor found".to_string()))?;

    let area = monitor.work_area().size.to_logical::<f64>(monitor.scale_factor());
    Ok(Size::from_rounded(area.width, area.height, Size::new(0, 0)))
}
