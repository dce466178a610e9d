//! Owner of the single note window.
//!
//! Every operation is a silent no-op while no window is attached. Native
//! failures are logged and otherwise treated the same way.
//!
//! The lock only guards the slot; native calls run on a cloned handle after
//! it is released, because some of them re-enter the manager through window
//! events (focus, destroy) on the same thread.

use std::sync::OnceLock;

use parking_lot::Mutex;

use super::placement::initial_position;
use super::{Position, Size, WindowHandle, WindowState};
use crate::constants::window::{MIN_HEIGHT, MIN_WIDTH};
use crate::error::PinnoteError;

/// Host-side flags the native window cannot report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFlags {
    pub always_on_top: bool,
    pub movable: bool,
    pub opacity: f64,
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self {
            always_on_top: true,
            movable: true,
            opacity: 1.0,
        }
    }
}

struct ManagedWindow<W> {
    handle: W,
    flags: WindowFlags,
}

/// Reports the primary display's usable area independently of any window.
pub type ScreenSource = Box<dyn Fn() -> Result<Size, PinnoteError> + Send + Sync>;

pub struct WindowManager<W: WindowHandle> {
    slot: Mutex<Option<ManagedWindow<W>>>,
    screen: OnceLock<ScreenSource>,
}

impl<W: WindowHandle> Default for WindowManager<W> {
    fn default() -> Self { Self::new() }
}

impl<W: WindowHandle> WindowManager<W> {
    #[must_use]
    pub const fn new() -> Self { Self { slot: Mutex::new(None), screen: OnceLock::new() } }

    /// Installs the display query used by [`Self::screen_work_area`]. Only the
    /// first source is kept.
    pub fn set_screen_source(&self, source: ScreenSource) {
        if self.screen.set(source).is_err() {
            tracing::debug!("screen source already installed");
        }
    }

    /// Takes ownership of `handle`, replacing any previous window.
    pub fn attach(&self, handle: W, flags: WindowFlags) {
        *self.slot.lock() = Some(ManagedWindow { handle, flags });
    }

    /// Forgets the current window, returning its handle.
    pub fn detach(&self) -> Option<W> { self.slot.lock().take().map(|managed| managed.handle) }

    #[must_use]
    pub fn has_window(&self) -> bool { self.slot.lock().is_some() }

    #[must_use]
    pub fn flags(&self) -> Option<WindowFlags> { self.slot.lock().as_ref().map(|m| m.flags) }

    fn handle(&self) -> Option<W> { self.slot.lock().as_ref().map(|m| m.handle.clone()) }

    fn update_flags(&self, update: impl FnOnce(&mut WindowFlags)) {
        if let Some(managed) = self.slot.lock().as_mut() {
            update(&mut managed.flags);
        }
    }

    /// Runs `op` on the current window, logging failures.
    fn with_handle<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&W) -> Result<T, PinnoteError>,
    ) -> Option<T> {
        let handle = self.handle()?;
        match f(&handle) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(op, error = %err, "window operation failed");
                None
            }
        }
    }

    pub fn minimize(&self) { self.with_handle("minimize", W::minimize); }

    pub fn close(&self) { self.with_handle("close", W::close); }

    pub fn hide(&self) { self.with_handle("hide", W::hide); }

    pub fn show(&self) { self.with_handle("show", W::show); }

    /// Focuses the window and re-asserts its transparent background.
    pub fn focus(&self) {
        self.with_handle("focus", |w| {
            w.focus()?;
            w.clear_background()
        });
    }

    /// Flips always-on-top and returns the new state (`false` without a window).
    pub fn toggle_always_on_top(&self) -> bool {
        let Some(current) = self.flags().map(|f| f.always_on_top) else {
            return false;
        };
        let next = !current;

        if self.with_handle("set_always_on_top", |w| w.set_always_on_top(next)).is_some() {
            self.update_flags(|f| f.always_on_top = next);
            next
        } else {
            current
        }
    }

    /// Current origin, or `(0, 0)` without a window.
    #[must_use]
    pub fn position(&self) -> Position {
        self.with_handle("position", W::position).unwrap_or_default()
    }

    /// Moves the window, rounding to whole pixels.
    pub fn set_position(&self, x: f64, y: f64) {
        let position = Position::from_rounded(x, y);
        self.with_handle("set_position", |w| w.set_position(position));
    }

    /// Current size, or the default 350x500 without a window.
    #[must_use]
    pub fn size(&self) -> Size { self.with_handle("size", W::size).unwrap_or_default() }

    /// Resizes the window (never below the minimum size), then focuses it.
    pub fn set_size(&self, width: f64, height: f64) {
        let size = Size::from_rounded(width, height, Size::new(MIN_WIDTH, MIN_HEIGHT));
        if self.with_handle("set_size", |w| w.set_size(size)).is_some() {
            self.focus();
        }
    }

    /// Sets the window opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&self, opacity: f64) {
        if opacity.is_nan() {
            return;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        if self.with_handle("set_opacity", |w| w.set_opacity(opacity)).is_some() {
            self.update_flags(|f| f.opacity = opacity);
        }
    }

    /// Enables or disables move gestures.
    pub fn set_draggable(&self, draggable: bool) {
        if self.with_handle("set_movable", |w| w.set_movable(draggable)).is_some() {
            self.update_flags(|f| f.movable = draggable);
        }
    }

    /// Flips draggability and returns the new state (`false` without a window).
    pub fn toggle_draggable(&self) -> bool {
        let Some(current) = self.flags().map(|f| f.movable) else {
            return false;
        };
        self.set_draggable(!current);
        self.flags().is_some_and(|f| f.movable)
    }

    /// Pushes the tracked opacity and draggability to the window again.
    pub fn reapply_flags(&self) {
        let Some(flags) = self.flags() else {
            return;
        };
        self.with_handle("set_opacity", |w| w.set_opacity(flags.opacity));
        self.with_handle("set_movable", |w| w.set_movable(flags.movable));
    }

    /// Usable area of the primary display.
    ///
    /// Asks the installed screen source, falling back to the window.
    #[must_use]
    pub fn screen_work_area(&self) -> Option<Size> {
        let Some(source) = self.screen.get() else {
            return self.with_handle("work_area", W::work_area);
        };
        match source() {
            Ok(size) => Some(size),
            Err(err) => {
                tracing::warn!(op = "work_area", error = %err, "window operation failed");
                None
            }
        }
    }

    /// Moves the window to its initial spot for the current work area.
    pub fn reset_position(&self) {
        let Some(work_area) = self.screen_work_area() else {
            return;
        };
        let position = initial_position(work_area);
        tracing::debug!(?work_area, ?position, "placing window");
        self.with_handle("set_position", |w| w.set_position(position));
    }

    /// Snapshot of the window flags, or `None` without a window.
    #[must_use]
    pub fn state(&self) -> Option<WindowState> {
        let flags = self.flags()?;
        let native = self.with_handle("state", W::native_state)?;

        Some(WindowState {
            is_visible: native.visible,
            is_minimized: native.minimized,
            is_maximized: native.maximized,
            is_always_on_top: flags.always_on_top,
            is_focused: native.focused,
        })
    }

    /// Shows, restores and focuses the window.
    pub fn reveal(&self) {
        self.show();
        self.with_handle("unminimize", W::unminimize);
        self.focus();
    }

    /// Hides a visible window, or reveals a hidden or minimized one.
    pub fn toggle_visibility(&self) {
        match self.state() {
            Some(state) if state.is_visible && !state.is_minimized => self.hide(),
            Some(_) => self.reveal(),
            None => {}
        }
    }
}
