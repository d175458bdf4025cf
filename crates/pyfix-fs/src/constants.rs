//! Well-known file names probed inside a project.

use std::path::Path;

/// Files and directories pyfix looks for while resolving a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFile {
    /// The `.git` directory (or worktree file)
    Git,
    /// The `.hg` directory
    Mercurial,
    /// The unified `pyproject.toml` manifest
    Pyproject,
    /// The dedicated `.isort.cfg` file
    IsortCfg,
    /// The legacy shared `setup.cfg` file
    SetupCfg,
}

impl ProjectFile {
    /// Entries whose presence marks a directory as a project root.
    pub const ROOT_MARKERS: [ProjectFile; 3] = [Self::Git, Self::Mercurial, Self::Pyproject];

    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => ".git",
            Self::Mercurial => ".hg",
            Self::Pyproject => "pyproject.toml",
            Self::IsortCfg => ".isort.cfg",
            Self::SetupCfg => "setup.cfg",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
