//! Native file pickers via `tauri-plugin-dialog`.
//!
//! The blocking picker calls must not run on the main thread; callers move
//! transfers onto a blocking task first.

use std::path::PathBuf;

use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, FileDialogBuilder};

use super::FileDialog;
use crate::error::PinnoteError;

pub struct NativeFileDialog<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> NativeFileDialog<R> {
    pub const fn new(app: AppHandle<R>) -> Self { Self { app } }

    fn json_picker(&self, title: &str) -> FileDialogBuilder<R> {
        self.app
            .dialog()
            .file()
            .set_title(title)
            .add_filter("JSON", &["json"])
            .add_filter("All Files", &["*"])
    }
}

impl<R: Runtime> FileDialog for NativeFileDialog<R> {
    fn pick_save_path(&self, default_file_name: &str) -> Result<Option<PathBuf>, PinnoteError> {
        self.json_picker("Export notes")
            .set_file_name(default_file_name)
            .blocking_save_file()
            .map(|path| path.into_path().map_err(|e| PinnoteError::DialogError(e.to_string())))
            .transpose()
    }

    fn pick_open_path(&self) -> Result<Option<PathBuf>, PinnoteError> {
        self.json_picker("Import notes")
            .blocking_pick_file()
            .map(|path| path.into_path().map_err(|e| PinnoteError::DialogError(e.to_string())))
            .transpose()
    }
}
