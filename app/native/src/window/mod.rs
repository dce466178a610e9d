//! Window control.
//!
//! - [`manager`] - owns the optional note window and applies every mutation
//! - [`placement`] - initial geometry
//! - [`native`] - the Tauri-backed [`WindowHandle`]
//! - [`setup`] - builds the frameless, transparent note window

pub mod manager;
pub mod native;
pub mod placement;
pub mod setup;

#[cfg(test)]
pub(crate) mod fake;

use serde::Serialize;

pub use manager::{WindowFlags, WindowManager};
pub use native::NativeWindow;

use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::PinnoteError;

/// Window origin in logical pixels. Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "[i32; 2]")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Rounds fractional coordinates to the nearest integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_rounded(x: f64, y: f64) -> Self { Self::new(x.round() as i32, y.round() as i32) }
}

impl From<Position> for [i32; 2] {
    fn from(position: Position) -> Self { [position.x, position.y] }
}

/// Window or screen extent in logical pixels. Serialized as `[width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "[u32; 2]")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }

    /// Rounds fractional extents, clamping each to at least `min`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rounded(width: f64, height: f64, min: Self) -> Self {
        let round = |value: f64, floor: u32| (value.round().max(0.0) as u32).max(floor);
        Self::new(round(width, min.width), round(height, min.height))
    }
}

impl Default for Size {
    fn default() -> Self { Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) }
}

impl From<Size> for [u32; 2] {
    fn from(size: Size) -> Self { [size.width, size.height] }
}

/// Flags the native window can report about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeState {
    pub visible: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
}

/// Snapshot returned by [`WindowManager::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub is_visible: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_always_on_top: bool,
    pub is_focused: bool,
}

/// A native window the manager can drive.
///
/// Handles are cheap clones of the same underlying window.
pub trait WindowHandle: Clone + Send + Sync {
    fn position(&self) -> Result<Position, PinnoteError>;
    fn set_position(&self, position: Position) -> Result<(), PinnoteError>;
    fn size(&self) -> Result<Size, PinnoteError>;
    fn set_size(&self, size: Size) -> Result<(), PinnoteError>;
    fn focus(&self) -> Result<(), PinnoteError>;
    fn minimize(&self) -> Result<(), PinnoteError>;
    fn unminimize(&self) -> Result<(), PinnoteError>;
    fn close(&self) -> Result<(), PinnoteError>;
    fn hide(&self) -> Result<(), PinnoteError>;
    fn show(&self) -> Result<(), PinnoteError>;
    fn native_state(&self) -> Result<NativeState, PinnoteError>;
    fn set_always_on_top(&self, always_on_top: bool) -> Result<(), PinnoteError>;
    fn set_opacity(&self, opacity: f64) -> Result<(), PinnoteError>;
    fn set_movable(&self, movable: bool) -> Result<(), PinnoteError>;

    /// Re-applies a fully transparent background.
    ///
    /// Some platforms repaint an opaque background on focus changes.
    fn clear_background(&self) -> Result<(), PinnoteError>;

    /// Usable area of the primary display.
    fn work_area(&self) -> Result<Size, PinnoteError>;
}
