//! Error types for Pinnote.
//!
//! This module provides the unified error type used throughout the host.
//! It implements the traits needed to be returned from Tauri commands.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while serving notes or driving the window.
///
/// This enum implements `Serialize` so it can be returned from Tauri commands,
/// providing structured error information to the frontend.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum PinnoteError {
    /// The note store could not be read or written.
    #[error("IO error: {0}")]
    IoError(String),
    /// A note document is not a valid note mapping.
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A native file dialog failed (not the same as being canceled).
    #[error("Dialog error: {0}")]
    DialogError(String),
    /// A native window call failed.
    #[error("Window error: {0}")]
    WindowError(String),
    /// The webview asked for an operation outside the bridge.
    #[error("Operation not exposed to the webview: {0}")]
    BridgeDenied(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for PinnoteError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for PinnoteError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::IoError(err.to_string())
        } else {
            Self::ParseError(err.to_string())
        }
    }
}

impl From<tempfile::PersistError> for PinnoteError {
    fn from(err: tempfile::PersistError) -> Self { Self::IoError(err.error.to_string()) }
}

impl From<tauri::Error> for PinnoteError {
    fn from(err: tauri::Error) -> Self { Self::WindowError(err.to_string()) }
}

impl From<String> for PinnoteError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for PinnoteError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
