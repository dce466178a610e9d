//! The note store file.
//!
//! Reads never fail from the caller's point of view: a missing file is an
//! empty store and an unreadable or corrupt file is logged and treated the
//! same way. Writes replace the file atomically and report failures.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::NoteStore;
use crate::error::PinnoteError;

/// Outcome of a write, returned as-is to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteResult {
    #[must_use]
    pub const fn ok() -> Self { Self { success: true, error: None } }

    #[must_use]
    pub fn failed(err: &PinnoteError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
        }
    }
}

/// Note store at a fixed path.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    path: PathBuf,
}

impl NoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// Loads the store, distinguishing a corrupt file from a missing one.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::IoError` if the file exists but cannot be read,
    /// and `PinnoteError::ParseError` if it is not a valid note document.
    pub fn load(&self) -> Result<NoteStore, PinnoteError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => NoteStore::from_json(&data),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(NoteStore::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Reads the store, degrading every failure to an empty store.
    #[must_use]
    pub fn read(&self) -> NoteStore {
        self.load().unwrap_or_else(|err| {
            tracing::error!(
                error = %err,
                path = %self.path.display(),
                "failed to read notes, serving an empty store"
            );
            NoteStore::new()
        })
    }

    /// Replaces the store with `notes`.
    pub fn write(&self, notes: &NoteStore) -> WriteResult {
        match write_notes_file(&self.path, notes) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = notes.len(), "notes written");
                WriteResult::ok()
            }
            Err(err) => {
                tracing::error!(error = %err, path = %self.path.display(), "failed to write notes");
                WriteResult::failed(&err)
            }
        }
    }
}

/// Serializes `notes` to `path` through a sibling temp file and a rename, so
/// readers see either the old document or the new one.
pub(crate) fn write_notes_file(path: &Path, notes: &NoteStore) -> Result<(), PinnoteError> {
    let json = notes.to_pretty_json()?;
    replace_file(path, |file| file.write_all(json.as_bytes()))
}

/// Replaces `path` with whatever `fill` writes. The target is only touched
/// once `fill` succeeded and the data is synced.
fn replace_file(
    path: &Path,
    fill: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> Result<(), PinnoteError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    fill(&mut tmp)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_in(dir: &tempfile::TempDir) -> NoteRepository {
        NoteRepository::new(dir.path().join("notes.json"))
    }

    #[test]
    fn load_distinguishes_corrupt_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        assert_eq!(repo.load().unwrap(), NoteStore::new());

        fs::write(repo.path(), "{ broken").unwrap();
        assert!(matches!(repo.load(), Err(PinnoteError::ParseError(_))));
        assert!(repo.read().is_empty());
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo = NoteRepository::new(dir.path().join("nested/deeper/notes.json"));
        let notes: NoteStore = [("main", "hi")].into_iter().collect();

        assert_eq!(repo.write(&notes), WriteResult::ok());
        assert_eq!(repo.read(), notes);
    }

    #[test]
    fn write_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        let notes: NoteStore = [("main", "hi")].into_iter().collect();

        assert!(repo.write(&notes).success);
        assert!(repo.write(&notes).success);

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn interrupted_write_keeps_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        let notes: NoteStore = [("main", "first draft")].into_iter().collect();
        assert!(repo.write(&notes).success);

        let result = replace_file(repo.path(), |file| {
            file.write_all(br#"{ "main": "sec"#)?;
            Err(std::io::Error::other("disk full"))
        });

        assert!(matches!(result, Err(PinnoteError::IoError(msg)) if msg.contains("disk full")));
        assert_eq!(repo.load().unwrap(), notes);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_below_a_file_keeps_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        let notes: NoteStore = [("main", "first draft")].into_iter().collect();
        assert!(repo.write(&notes).success);

        // The parent of the target is a file, so the new document cannot be
        // staged next to it.
        let blocked = NoteRepository::new(repo.path().join("notes.json"));
        let result = blocked.write(&[("main", "second")].into_iter().collect());

        assert!(!result.success);
        assert_eq!(repo.load().unwrap(), notes);
    }

    #[test]
    fn write_result_serializes_without_error_on_success() {
        let json = serde_json::to_string(&WriteResult::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);

        let failed = WriteResult::failed(&PinnoteError::IoError("disk full".to_string()));
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains(r#""success":false"#));
        assert!(json.contains("disk full"));
    }
}
