//! In-memory window for tests.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{NativeState, Position, Size, WindowHandle};
use crate::error::PinnoteError;

#[derive(Debug, Clone)]
pub struct FakeState {
    pub position: Position,
    pub size: Size,
    pub work_area: Size,
    pub visible: bool,
    pub minimized: bool,
    pub focused: bool,
    pub always_on_top: bool,
    pub opacity: f64,
    pub movable: bool,
    pub closed: bool,
    pub background_clears: usize,
    pub calls: Vec<&'static str>,
    pub fail: bool,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            position: Position::default(),
            size: Size::default(),
            work_area: Size::new(1920, 1080),
            visible: true,
            minimized: false,
            focused: false,
            always_on_top: true,
            opacity: 1.0,
            movable: true,
            closed: false,
            background_clears: 0,
            calls: Vec::new(),
            fail: false,
        }
    }
}

/// Clones share the same state, like handles to one native window.
#[derive(Debug, Clone, Default)]
pub struct FakeWindow {
    state: Arc<Mutex<FakeState>>,
}

impl FakeWindow {
    pub fn snapshot(&self) -> FakeState { self.state.lock().clone() }

    pub fn fail_calls(&self, fail: bool) { self.state.lock().fail = fail; }

    pub fn set_work_area(&self, work_area: Size) { self.state.lock().work_area = work_area; }

    fn record<T>(
        &self,
        call: &'static str,
        f: impl FnOnce(&mut FakeState) -> T,
    ) -> Result<T, PinnoteError> {
        let mut state = self.state.lock();
        state.calls.push(call);
        if state.fail {
            return Err(PinnoteError::WindowError(format!("{call} failed")));
        }
        Ok(f(&mut state))
    }
}

impl WindowHandle for FakeWindow {
    fn position(&self) -> Result<Position, PinnoteError> { self.record("position", |s| s.position) }

    fn set_position(&self, position: Position) -> Result<(), PinnoteError> {
        self.record("set_position", |s| s.position = position)
    }

    fn size(&self) -> Result<Size, PinnoteError> { self.record("size", |s| s.size) }

    fn set_size(&self, size: Size) -> Result<(), PinnoteError> {
        self.record("set_size", |s| s.size = size)
    }

    fn focus(&self) -> Result<(), PinnoteError> { self.record("focus", |s| s.focused = true) }

    fn minimize(&self) -> Result<(), PinnoteError> {
        self.record("minimize", |s| {
            s.minimized = true;
            s.focused = false;
        })
    }

    fn close(&self) -> Result<(), PinnoteError> {
        self.record("close", |s| {
            s.closed = true;
            s.visible = false;
        })
    }

    fn hide(&self) -> Result<(), PinnoteError> {
        self.record("hide", |s| {
            s.visible = false;
            s.focused = false;
        })
    }

    // Like the native call, showing does not restore a minimized window.
    fn show(&self) -> Result<(), PinnoteError> { self.record("show", |s| s.visible = true) }

    fn unminimize(&self) -> Result<(), PinnoteError> {
        self.record("unminimize", |s| s.minimized = false)
    }

    fn native_state(&self) -> Result<NativeState, PinnoteError> {
        self.record("native_state", |s| NativeState {
            visible: s.visible,
            minimized: s.minimized,
            maximized: false,
            focused: s.focused,
        })
    }

    fn set_always_on_top(&self, always_on_top: bool) -> Result<(), PinnoteError> {
        self.record("set_always_on_top", |s| s.always_on_top = always_on_top)
    }

    fn set_opacity(&self, opacity: f64) -> Result<(), PinnoteError> {
        self.record("set_opacity", |s| s.opacity = opacity)
    }

    fn set_movable(&self, movable: bool) -> Result<(), PinnoteError> {
        self.record("set_movable", |s| s.movable = movable)
    }

    fn clear_background(&self) -> Result<(), PinnoteError> {
        self.record("clear_background", |s| s.background_clears += 1)
    }

    fn work_area(&self) -> Result<Size, PinnoteError> { self.record("work_area", |s| s.work_area) }
}
