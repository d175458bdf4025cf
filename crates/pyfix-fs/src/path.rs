//! Normalized path handling for cross-platform compatibility

use std::path::{Component, Path, PathBuf};

/// A path with a stable, forward-slash display form.
///
/// Project roots and configuration file locations are carried around as
/// `NormalizedPath` so that error messages and log records look the same on
/// every platform. The native path is kept alongside untouched, and all I/O
/// goes through it: on Unix a `\` is an ordinary file name character and
/// names need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Display form, `/`-separated on every platform
    inner: String,
    native: PathBuf,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// `.` segments and repeated separators are dropped. `..` is kept as
    /// written: resolving it lexically would be wrong across symlinks.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let native = clean(path.as_ref());
        Self {
            inner: display_form(&native),
            native,
        }
    }

    /// Get the display string.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The platform-native path, for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        self.native.clone()
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        Self::new(self.native.join(segment))
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.native.file_name().and_then(|name| name.to_str())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.native.extension().and_then(|ext| ext.to_str())
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.native.is_file()
    }
}

/// Drop `.` segments; `components` already collapses repeated separators.
fn clean(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if cleaned.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(windows)]
fn display_form(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
fn display_form(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.native
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
