//! Application-wide constants.

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "pinnote";

/// Label of the single note window.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// File name of the note store when no path is configured.
pub const NOTES_FILE_NAME: &str = "notes.json";

/// Window geometry used at creation and as the fallback when no window exists.
pub mod window {
    pub const DEFAULT_WIDTH: u32 = 350;
    pub const DEFAULT_HEIGHT: u32 = 500;
    pub const MIN_WIDTH: u32 = 60;
    pub const MIN_HEIGHT: u32 = 60;

    /// Gap between the window's right edge and the work area's right edge.
    pub const RIGHT_MARGIN: u32 = 10;
}
