//! isort engine adapter

use std::ffi::OsString;
use std::path::PathBuf;

use pyfix_config::{FormatterId, ResolvedConfig};

use crate::error::Result;
use crate::{FormatContext, Formatter, subprocess};

/// Runs isort through a Python interpreter.
///
/// isort reads its own settings; it is pointed at the file that supplied the
/// resolved config, or at the project root when nothing was found, so the
/// engine sees exactly the source the resolver picked.
#[derive(Debug, Clone)]
pub struct IsortEngine {
    python: PathBuf,
}

impl IsortEngine {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Formatter for IsortEngine {
    fn id(&self) -> FormatterId {
        FormatterId::Isort
    }

    fn format(
        &self,
        source: String,
        config: &ResolvedConfig,
        context: &FormatContext,
    ) -> Result<String> {
        let args = isort_args(config, context);
        subprocess::run_module(
            &self.python,
            FormatterId::Isort,
            &args,
            &source,
            &context.root.to_native(),
        )
    }
}

/// Build isort's command line from a resolved config.
pub fn isort_args(config: &ResolvedConfig, context: &FormatContext) -> Vec<OsString> {
    let settings = config.source.as_ref().unwrap_or(&context.root);
    vec![
        OsString::from("--settings-path"),
        settings.to_native().into_os_string(),
        OsString::from("-"),
    ]
}
