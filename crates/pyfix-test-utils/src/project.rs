//! [`TestProject`] builder for pyfix test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Python project directory with helpers for test setup and
/// assertion.
///
/// Nothing is written until asked for, so a fresh `TestProject` is a
/// directory with no project markers and no configuration.
///
/// # Example
///
/// ```rust,no_run
/// use pyfix_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.init_git();
/// project.pyproject("[tool.black]\nline-length = 100\n");
/// let file = project.write_file("pkg/module.py", "import os\n");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project. Nothing is created.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Mark the directory as a git checkout.
    ///
    /// Only the `.git` directory is created; root discovery looks for its
    /// presence, not its contents.
    pub fn init_git(&self) {
        self.mkdir(".git");
    }

    /// Mark the directory as a Mercurial checkout.
    pub fn init_hg(&self) {
        self.mkdir(".hg");
    }

    /// Create a directory (and its parents) inside the project.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `pyproject.toml` at the project root.
    pub fn pyproject(&self, content: &str) -> PathBuf {
        self.write_file("pyproject.toml", content)
    }

    /// Write `.isort.cfg` at the project root.
    pub fn isort_cfg(&self, content: &str) -> PathBuf {
        self.write_file(".isort.cfg", content)
    }

    /// Write `setup.cfg` at the project root.
    pub fn setup_cfg(&self, content: &str) -> PathBuf {
        self.write_file("setup.cfg", content)
    }

    /// Assert that the file at `relative` holds exactly `expected`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_file_eq(&self, relative: &str, expected: &str) {
        let path = self.path(relative);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()));
        assert_eq!(actual, expected, "Unexpected content in {}", path.display());
    }
}
