//! Subprocess execution of Python engine modules
//!
//! Each engine runs as `python -m <module> <args> -`, reading the source on
//! stdin and writing the result to stdout. The source is spooled through an
//! anonymous temporary file so no writer thread is needed to keep the pipe
//! from filling up.

use std::ffi::OsStr;
use std::fmt::Debug;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use pyfix_config::FormatterId;

use crate::error::{EngineError, Result};

/// Exit code command-line parsers in both engines use for usage errors.
const USAGE_ERROR_CODE: i32 = 2;

/// Run `python -m <formatter> <args>` in `working_dir` with `input` on stdin.
///
/// Returns stdout on success.
pub fn run_module<S: AsRef<OsStr> + Debug>(
    python: &Path,
    formatter: FormatterId,
    args: &[S],
    input: &str,
    working_dir: &Path,
) -> Result<String> {
    let spawn_error = |source| EngineError::Spawn { formatter, source };

    let mut stdin = tempfile::tempfile().map_err(spawn_error)?;
    stdin.write_all(input.as_bytes()).map_err(spawn_error)?;
    stdin.seek(SeekFrom::Start(0)).map_err(spawn_error)?;

    tracing::debug!(
        python = %python.display(),
        module = formatter.as_str(),
        ?args,
        cwd = %working_dir.display(),
        "Running engine"
    );

    let output = Command::new(python)
        .current_dir(working_dir)
        .env("PYTHONIOENCODING", "utf-8")
        .arg("-m")
        .arg(formatter.as_str())
        .args(args)
        .stdin(Stdio::from(stdin))
        .output()
        .map_err(spawn_error)?;

    classify_output(formatter, output.status.code(), output.stdout, &output.stderr)
}

/// Turn an engine's exit status and streams into a result.
pub fn classify_output(
    formatter: FormatterId,
    code: Option<i32>,
    stdout: Vec<u8>,
    stderr: &[u8],
) -> Result<String> {
    let diagnostics = String::from_utf8_lossy(stderr).trim().to_string();

    match code {
        Some(0) => String::from_utf8(stdout).map_err(|_| EngineError::InvalidOutput { formatter }),
        Some(USAGE_ERROR_CODE) => Err(EngineError::UnsupportedOption {
            formatter,
            option: "command line".to_string(),
            reason: diagnostics,
        }),
        other => {
            let detail = if diagnostics.is_empty() {
                match other {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated by signal".to_string(),
                }
            } else {
                diagnostics
            };
            tracing::warn!(%formatter, %detail, "Engine rejected the source");
            Err(EngineError::Rejected { formatter, detail })
        }
    }
}
