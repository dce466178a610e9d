//! The host: note persistence plus the note window, shared as Tauri state.

use chrono::NaiveDate;
use tauri::Wry;

use crate::bridge::Bridge;
use crate::notes::{ExportResult, FileDialog, ImportResult, NoteRepository, transfer};
use crate::window::{NativeWindow, WindowHandle, WindowManager};

pub struct Host<W: WindowHandle> {
    notes: NoteRepository,
    window: WindowManager<W>,
}

/// The host as managed by the running app.
pub type AppHost<R = Wry> = Host<NativeWindow<R>>;

impl<W: WindowHandle> Host<W> {
    /// Creates a host with no window attached yet.
    #[must_use]
    pub const fn new(notes: NoteRepository) -> Self { Self { notes, window: WindowManager::new() } }

    #[must_use]
    pub const fn notes(&self) -> &NoteRepository { &self.notes }

    #[must_use]
    pub const fn window(&self) -> &WindowManager<W> { &self.window }

    /// The restricted surface handed to the webview.
    #[must_use]
    pub const fn bridge(&self) -> Bridge<'_, W> { Bridge::new(self) }

    /// Exports the current contents of the store.
    ///
    /// An unreadable or corrupt store fails the export before any dialog is
    /// shown rather than producing an empty backup.
    pub fn export_notes(&self, dialog: &impl FileDialog, today: NaiveDate) -> ExportResult {
        match self.notes.load() {
            Ok(notes) => transfer::export_notes(dialog, &notes, today),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    path = %self.notes.path().display(),
                    "refusing to export unreadable notes"
                );
                ExportResult::failed(&err)
            }
        }
    }

    /// Reads a document to import. The store is left untouched.
    #[allow(clippy::unused_self)]
    pub fn import_notes(&self, dialog: &impl FileDialog) -> ImportResult {
        transfer::import_notes(dialog)
    }
}
