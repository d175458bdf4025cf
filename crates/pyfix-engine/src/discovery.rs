//! Engine discovery: find a Python 3 interpreter and probe black and isort
//!
//! The probe runs once at startup. Its result decides whether a request is
//! read at all, so nothing here fails: missing pieces are recorded and
//! reported through [`EngineManager::engines`] and
//! [`EngineManager::health_check`].

use std::path::{Path, PathBuf};
use std::process::Command;

use pyfix_config::FormatterId;

use crate::error::{EngineError, Result};
use crate::types::HealthReport;
use crate::{BlackEngine, Engines, IsortEngine};

/// Interpreter names tried in order on `PATH`.
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Required Python major version
const REQUIRED_PYTHON_MAJOR: u32 = 3;

/// Prints the interpreter version and its absolute path on two lines.
const INTERPRETER_PROBE: &str = "import platform, sys; print(platform.python_version()); print(sys.executable)";

/// Engine manager: knows which interpreter and engine versions are usable
#[derive(Debug, Clone, Default)]
pub struct EngineManager {
    /// Path to the Python interpreter, if found
    python_path: Option<PathBuf>,
    /// Detected Python version string
    python_version: Option<String>,
    /// Installed black version
    black_version: Option<String>,
    /// Installed isort version
    isort_version: Option<String>,
}

impl EngineManager {
    /// Probe the environment for an interpreter and both engines.
    pub fn discover() -> Self {
        let Some((python_path, python_version)) = find_python() else {
            tracing::debug!("No Python 3 interpreter found");
            return Self::default();
        };

        let black_version = module_version(&python_path, FormatterId::Black);
        let isort_version = module_version(&python_path, FormatterId::Isort);
        tracing::debug!(
            python = %python_path.display(),
            %python_version,
            ?black_version,
            ?isort_version,
            "Probed formatting engines"
        );

        Self {
            python_path: Some(python_path),
            python_version: Some(python_version),
            black_version,
            isort_version,
        }
    }

    /// Build a manager from already known facts.
    pub fn from_parts(
        python_path: Option<PathBuf>,
        python_version: Option<String>,
        black_version: Option<String>,
        isort_version: Option<String>,
    ) -> Self {
        Self {
            python_path,
            python_version,
            black_version,
            isort_version,
        }
    }

    /// Whether both engines can be run.
    pub fn is_available(&self) -> bool {
        self.python_path.is_some() && self.missing().is_empty()
    }

    /// Installed version of a formatter, if importable.
    pub fn version(&self, formatter: FormatterId) -> Option<&str> {
        match formatter {
            FormatterId::Black => self.black_version.as_deref(),
            FormatterId::Isort => self.isort_version.as_deref(),
        }
    }

    fn missing(&self) -> Vec<FormatterId> {
        FormatterId::ALL
            .into_iter()
            .filter(|id| self.version(*id).is_none())
            .collect()
    }

    /// Hand out the subprocess engines, or explain why they cannot run.
    pub fn engines(&self) -> Result<Engines> {
        match &self.python_path {
            Some(python) if self.is_available() => Ok(Engines::new(
                Box::new(BlackEngine::new(python)),
                Box::new(IsortEngine::new(python)),
            )),
            _ => Err(EngineError::Unavailable {
                python: self.python_description(),
                missing: self.missing(),
            }),
        }
    }

    /// The interpreter as shown to users.
    pub fn python_description(&self) -> String {
        match &self.python_path {
            Some(path) => path.display().to_string(),
            None => format!("{} (no interpreter found)", PYTHON_CANDIDATES.join(" or ")),
        }
    }

    /// Perform a health check and return a detailed report
    pub fn health_check(&self) -> HealthReport {
        let mut messages = Vec::new();

        match &self.python_path {
            Some(path) => messages.push(format!(
                "Python found: {} ({})",
                path.display(),
                self.python_version.as_deref().unwrap_or("unknown")
            )),
            None => messages.push(format!(
                "Python {}.x not found. Tried: {}",
                REQUIRED_PYTHON_MAJOR,
                PYTHON_CANDIDATES.join(", ")
            )),
        }

        for formatter in FormatterId::ALL {
            match self.version(formatter) {
                Some(version) => messages.push(format!("{} {} importable", formatter, version)),
                None => messages.push(format!("{} not importable", formatter)),
            }
        }

        HealthReport {
            available: self.is_available(),
            python_path: self.python_path.as_ref().map(|p| p.display().to_string()),
            python_version: self.python_version.clone(),
            black_version: self.black_version.clone(),
            isort_version: self.isort_version.clone(),
            messages,
        }
    }
}

/// Search for a Python 3 interpreter
fn find_python() -> Option<(PathBuf, String)> {
    PYTHON_CANDIDATES.iter().find_map(|candidate| try_python(candidate))
}

/// Try a specific Python interpreter candidate
fn try_python(candidate: &str) -> Option<(PathBuf, String)> {
    let output = Command::new(candidate)
        .arg("-c")
        .arg(INTERPRETER_PROBE)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let (version, executable) = parse_interpreter_probe(&String::from_utf8_lossy(&output.stdout))?;
    let path = if executable.is_empty() {
        PathBuf::from(candidate)
    } else {
        PathBuf::from(executable)
    };
    Some((path, version))
}

/// Parse the two-line interpreter probe, keeping only Python 3.
fn parse_interpreter_probe(stdout: &str) -> Option<(String, String)> {
    let mut lines = stdout.lines().map(str::trim);
    let version = lines.next()?.to_string();
    let executable = lines.next().unwrap_or("").to_string();

    let major: u32 = version.split('.').next()?.parse().ok()?;
    (major == REQUIRED_PYTHON_MAJOR).then_some((version, executable))
}

/// Import a module and read its `__version__`.
fn module_version(python: &Path, formatter: FormatterId) -> Option<String> {
    let module = formatter.as_str();
    let output = Command::new(python)
        .arg("-c")
        .arg(format!("import {module}; print({module}.__version__)"))
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Some(if version.is_empty() {
        "unknown".to_string()
    } else {
        version
    })
}
