//! Export and import through user-chosen files.
//!
//! A canceled dialog is a normal outcome (`canceled: true`), distinct from a
//! failure (`error: "..."`). Imports are returned to the caller and never
//! merged into the store here.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use super::NoteStore;
use super::store::write_notes_file;
use crate::error::PinnoteError;

/// Native file pickers.
///
/// `Ok(None)` means the user dismissed the dialog.
pub trait FileDialog {
    /// Asks for an export destination, proposing `default_file_name`.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::DialogError` if the picker fails or returns an
    /// unusable path.
    fn pick_save_path(&self, default_file_name: &str) -> Result<Option<PathBuf>, PinnoteError>;

    /// Asks for a JSON file to import.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::DialogError` if the picker fails or returns an
    /// unusable path.
    fn pick_open_path(&self) -> Result<Option<PathBuf>, PinnoteError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResult {
    const fn written(path: PathBuf) -> Self {
        Self { success: true, path: Some(path), canceled: None, error: None }
    }

    const fn canceled() -> Self {
        Self { success: false, path: None, canceled: Some(true), error: None }
    }

    pub(crate) fn failed(err: &PinnoteError) -> Self {
        Self { success: false, path: None, canceled: None, error: Some(err.to_string()) }
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool { self.canceled == Some(true) }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<NoteStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportResult {
    const fn loaded(notes: NoteStore) -> Self {
        Self { success: true, notes: Some(notes), canceled: None, error: None }
    }

    const fn canceled() -> Self {
        Self { success: false, notes: None, canceled: Some(true), error: None }
    }

    fn failed(err: &PinnoteError) -> Self {
        Self { success: false, notes: None, canceled: None, error: Some(err.to_string()) }
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool { self.canceled == Some(true) }
}

/// Default export file name for `date`: `notes_YYYY-MM-DD.json`.
#[must_use]
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("notes_{}.json", date.format("%Y-%m-%d"))
}

/// Writes `notes` to a location chosen through `dialog`.
pub fn export_notes(dialog: &impl FileDialog, notes: &NoteStore, today: NaiveDate) -> ExportResult {
    let attempt = || -> Result<Option<PathBuf>, PinnoteError> {
        let Some(path) = dialog.pick_save_path(&default_export_file_name(today))? else {
            return Ok(None);
        };
        write_notes_file(&path, notes)?;
        Ok(Some(path))
    };

    match attempt() {
        Ok(Some(path)) => {
            tracing::info!(path = %path.display(), count = notes.len(), "notes exported");
            ExportResult::written(path)
        }
        Ok(None) => {
            tracing::debug!("export canceled");
            ExportResult::canceled()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to export notes");
            ExportResult::failed(&err)
        }
    }
}

/// Reads a note document from a file chosen through `dialog`.
pub fn import_notes(dialog: &impl FileDialog) -> ImportResult {
    let attempt = || -> Result<Option<NoteStore>, PinnoteError> {
        let Some(path) = dialog.pick_open_path()? else {
            return Ok(None);
        };
        let data = fs::read_to_string(&path)?;
        NoteStore::from_json(&data).map(Some)
    };

    match attempt() {
        Ok(Some(notes)) => {
            tracing::info!(count = notes.len(), "notes imported");
            ImportResult::loaded(notes)
        }
        Ok(None) => {
            tracing::debug!("import canceled");
            ImportResult::canceled()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to import notes");
            ImportResult::failed(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingDialog;

    impl FileDialog for FailingDialog {
        fn pick_save_path(&self, _: &str) -> Result<Option<PathBuf>, PinnoteError> {
            Err(PinnoteError::DialogError("no display".to_string()))
        }

        fn pick_open_path(&self) -> Result<Option<PathBuf>, PinnoteError> {
            Err(PinnoteError::DialogError("no display".to_string()))
        }
    }

    #[test]
    fn default_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(default_export_file_name(date), "notes_2024-03-07.json");
    }

    #[test]
    fn dialog_failure_is_reported_not_canceled() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let export = export_notes(&FailingDialog, &NoteStore::new(), date);
        assert!(!export.success);
        assert!(!export.is_canceled());
        assert!(export.error.as_deref().is_some_and(|e| e.contains("no display")));

        let import = import_notes(&FailingDialog);
        assert!(!import.success);
        assert!(import.notes.is_none());
        assert!(import.error.is_some());
    }

    #[test]
    fn canceled_results_serialize_like_the_bridge_expects() {
        let json = serde_json::to_value(ExportResult::canceled()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "canceled": true }));

        let json = serde_json::to_value(ImportResult::canceled()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "canceled": true }));
    }
}
