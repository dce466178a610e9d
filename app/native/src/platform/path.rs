//! Path expansion for user-supplied locations.
//!
//! Used to turn the configured `notesPath` into an absolute store location.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Absolute and relative paths are returned unchanged; an empty or
/// whitespace-only input yields an empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands `~` and resolves relative paths against `base_dir`.
///
/// ```ignore
/// use std::path::Path;
/// use pinnote_lib::platform::path::expand_and_resolve;
///
/// let base = Path::new("/home/me/.config/pinnote");
/// let resolved = expand_and_resolve("notes.json", base);
/// assert_eq!(resolved, base.join("notes.json"));
/// ```
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);

    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}
