//! Project root discovery
//!
//! The root is the nearest enclosing directory that carries a version
//! control directory or a `pyproject.toml`. It anchors every configuration
//! lookup for a request.

use std::path::{Path, PathBuf};

use crate::{NormalizedPath, ProjectFile};

/// Find the project root for `file_path`.
///
/// The walk starts at the directory containing `file_path` (or at
/// `file_path` itself when it names a directory). An empty or absent path
/// starts at `cwd`, and relative paths are taken relative to `cwd`.
///
/// The first directory holding any of [`ProjectFile::ROOT_MARKERS`] wins.
/// When the walk reaches the filesystem root without a match, the nearest
/// existing ancestor of the start directory is returned instead.
///
/// Only metadata is probed; nothing is read or written.
pub fn find_project_root(file_path: Option<&Path>, cwd: &Path) -> NormalizedPath {
    let start = nearest_existing_dir(&start_directory(file_path, cwd));

    for dir in start.ancestors() {
        let marker = ProjectFile::ROOT_MARKERS
            .iter()
            .find(|marker| dir.join(marker).exists());

        if let Some(marker) = marker {
            tracing::debug!(root = %dir.display(), %marker, "Found project root");
            return NormalizedPath::new(dir);
        }
    }

    tracing::debug!(
        root = %start.display(),
        "No project marker found, using nearest existing directory"
    );
    NormalizedPath::new(start)
}

fn start_directory(file_path: Option<&Path>, cwd: &Path) -> PathBuf {
    let Some(path) = file_path.filter(|p| !p.as_os_str().is_empty()) else {
        return cwd.to_path_buf();
    };

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    if absolute.is_dir() {
        return absolute;
    }

    match absolute.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

fn nearest_existing_dir(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|dir| dir.is_dir())
        .map(|dir| dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()))
        .unwrap_or_else(|| path.to_path_buf())
}
