//! Centralized event definitions for frontend communication.
//!
//! Events are the only way host-internal operations talk back to the webview.
//!
//! ## Naming Convention
//!
//! All events follow the pattern: `pinnote://<module>/<event-name>`

/// Note transfer events.
pub mod notes {
    /// Emitted after a successful import from the tray or a shortcut.
    ///
    /// Payload: `NoteStore` - The imported mapping, not yet merged into the store.
    pub const IMPORTED: &str = "pinnote://notes/imported";

    /// Emitted after a successful export.
    ///
    /// Payload: `String` - The destination path.
    pub const EXPORTED: &str = "pinnote://notes/exported";
}

/// Window events.
pub mod window {
    /// Emitted when move gestures are enabled or disabled.
    ///
    /// Payload: `bool` - `true` if the window may be dragged.
    pub const DRAGGABLE_CHANGED: &str = "pinnote://window/draggable-changed";

    /// Emitted when the always-on-top flag changes.
    ///
    /// Payload: `bool` - The new state.
    pub const ALWAYS_ON_TOP_CHANGED: &str = "pinnote://window/always-on-top-changed";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_share_prefix() {
        for event in [
            notes::IMPORTED,
            notes::EXPORTED,
            window::DRAGGABLE_CHANGED,
            window::ALWAYS_ON_TOP_CHANGED,
        ] {
            assert!(event.starts_with("pinnote://"), "{event}");
        }
    }
}
