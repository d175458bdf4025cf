//! Shared types for engine operations

use std::path::PathBuf;

use pyfix_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Where a request's source lives, as far as the engines care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// Project root; engines run with it as their working directory
    pub root: NormalizedPath,
    /// The file being formatted, if the editor gave one
    pub file_path: Option<PathBuf>,
}

impl FormatContext {
    pub fn new(root: NormalizedPath, file_path: Option<PathBuf>) -> Self {
        Self { root, file_path }
    }

    /// Whether the source is a type stub (`.pyi`).
    pub fn is_stub(&self) -> bool {
        self.file_path
            .as_ref()
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext == "pyi")
    }
}

/// Health report for the formatting engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Whether both engines can be run
    pub available: bool,
    /// Path to the Python interpreter, if found
    pub python_path: Option<String>,
    /// Python version string, if found
    pub python_version: Option<String>,
    /// Installed black version, if importable
    pub black_version: Option<String>,
    /// Installed isort version, if importable
    pub isort_version: Option<String>,
    /// Human-readable status messages
    pub messages: Vec<String>,
}
