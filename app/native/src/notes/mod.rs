//! Note persistence.
//!
//! The whole note set is one JSON object mapping note identifiers to content.
//! It is read fully, replaced wholesale, and never merged by the host.
//!
//! - [`store`] - the on-disk store (`read`/`write`)
//! - [`transfer`] - export to and import from user-chosen files
//! - [`dialog`] - native file pickers backing [`transfer::FileDialog`]

pub mod dialog;
pub mod store;
pub mod transfer;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use store::{NoteRepository, WriteResult};
pub use transfer::{ExportResult, FileDialog, ImportResult};

use crate::error::PinnoteError;

/// Application-defined note identifier.
pub type NoteId = String;

/// Content of a single note.
///
/// Plain text covers the common case; an object lets the presentation layer
/// keep per-note fields (color, title, ...). Any other JSON value is kept
/// as-is so documents written by other tools survive a read/write cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteContent {
    Text(String),
    Structured(serde_json::Map<String, serde_json::Value>),
    Other(serde_json::Value),
}

impl From<&str> for NoteContent {
    fn from(text: &str) -> Self { Self::Text(text.to_string()) }
}

impl From<String> for NoteContent {
    fn from(text: String) -> Self { Self::Text(text) }
}

/// The complete note document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore(BTreeMap<NoteId, NoteContent>);

impl NoteStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NoteContent> { self.0.get(id) }

    /// Inserts or replaces a note, returning the previous content.
    pub fn insert(
        &mut self,
        id: impl Into<NoteId>,
        content: impl Into<NoteContent>,
    ) -> Option<NoteContent> {
        self.0.insert(id.into(), content.into())
    }

    /// Parses a note document.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::ParseError` if the input is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PinnoteError> { Ok(serde_json::from_str(json)?) }

    /// Converts an already parsed document, e.g. a bridge payload.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::ParseError` if `value` is not a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PinnoteError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the document as 2-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `PinnoteError::ParseError` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, PinnoteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K: Into<NoteId>, V: Into<NoteContent>> FromIterator<(K, V)> for NoteStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
