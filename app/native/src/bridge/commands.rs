//! Tauri command handlers for the bridge.
//!
//! Registered in `lib.rs` behind `bridge::guard`; tests check the registered
//! list against `BridgeMethod::ALL`.

use tauri::State;

use crate::host::AppHost;
use crate::notes::{NoteStore, WriteResult};
use crate::window::Position;

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn read_notes(host: State<'_, AppHost>) -> NoteStore { host.bridge().read_notes() }

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn write_notes(host: State<'_, AppHost>, notes: serde_json::Value) -> WriteResult {
    host.bridge().write_notes(notes)
}

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn set_window_size(host: State<'_, AppHost>, width: f64, height: f64) {
    host.bridge().set_window_size(width, height);
}

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn set_window_position(host: State<'_, AppHost>, x: f64, y: f64) {
    host.bridge().set_window_position(x, y);
}

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn get_window_position(host: State<'_, AppHost>) -> Position {
    host.bridge().get_window_position()
}

#[tauri::command]
#[allow(clippy::needless_pass_by_value)]
pub fn focus_window(host: State<'_, AppHost>) { host.bridge().focus_window(); }
