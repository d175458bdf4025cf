//! black engine adapter

use std::path::PathBuf;

use pyfix_config::{BlackOption, FormatterId, ResolvedConfig};

use crate::error::{EngineError, Result};
use crate::{FormatContext, Formatter, subprocess};

/// Runs black through a Python interpreter.
#[derive(Debug, Clone)]
pub struct BlackEngine {
    python: PathBuf,
}

impl BlackEngine {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Formatter for BlackEngine {
    fn id(&self) -> FormatterId {
        FormatterId::Black
    }

    fn format(
        &self,
        source: String,
        config: &ResolvedConfig,
        context: &FormatContext,
    ) -> Result<String> {
        let args = black_args(config, context)?;
        subprocess::run_module(
            &self.python,
            FormatterId::Black,
            &args,
            &source,
            &context.root.to_native(),
        )
    }
}

/// Build black's command line from a resolved config.
///
/// Values are checked here so a bad `[tool.black]` entry is reported as an
/// unsupported option naming the key, rather than as a usage error from the
/// engine.
pub fn black_args(config: &ResolvedConfig, context: &FormatContext) -> Result<Vec<String>> {
    let mut args = vec!["--quiet".to_string()];
    let mut pyi = context.is_stub();

    for (key, value) in &config.options {
        let Some(option) = BlackOption::from_internal(key) else {
            continue;
        };

        match option {
            BlackOption::LineLength => {
                let length = value
                    .as_integer()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| unsupported(option, value, "expected a positive integer"))?;
                args.push(option.flag().to_string());
                args.push(length.to_string());
            }
            BlackOption::TargetVersion => {
                for version in target_versions(value)? {
                    args.push(option.flag().to_string());
                    args.push(version);
                }
            }
            BlackOption::Pyi => pyi |= expect_bool(option, value)?,
            BlackOption::SkipStringNormalization
            | BlackOption::SkipMagicTrailingComma
            | BlackOption::Preview => {
                if expect_bool(option, value)? {
                    args.push(option.flag().to_string());
                }
            }
            BlackOption::RequiredVersion => {
                let version = match value {
                    toml::Value::String(s) => s.clone(),
                    toml::Value::Integer(n) => n.to_string(),
                    _ => return Err(unsupported(option, value, "expected a version string")),
                };
                args.push(option.flag().to_string());
                args.push(version);
            }
            BlackOption::Include
            | BlackOption::Exclude
            | BlackOption::ExtendExclude
            | BlackOption::ForceExclude => {
                debug_assert!(!option.affects_output());
            }
        }
    }

    if pyi {
        args.push(BlackOption::Pyi.flag().to_string());
    }
    args.push("-".to_string());
    Ok(args)
}

/// Target versions are written `py38` or `PY38`; black wants lower case.
fn target_versions(value: &toml::Value) -> Result<Vec<String>> {
    let option = BlackOption::TargetVersion;
    let entries: Vec<&toml::Value> = match value {
        toml::Value::Array(items) => items.iter().collect(),
        toml::Value::String(_) => vec![value],
        _ => return Err(unsupported(option, value, "expected a list of versions")),
    };

    entries
        .into_iter()
        .map(|entry| {
            let version = entry
                .as_str()
                .map(str::to_lowercase)
                .ok_or_else(|| unsupported(option, entry, "expected a version string"))?;
            let digits = version.strip_prefix("py3").unwrap_or("");
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(unsupported(option, entry, "expected a version like py38"));
            }
            Ok(version)
        })
        .collect()
}

fn expect_bool(option: BlackOption, value: &toml::Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| unsupported(option, value, "expected true or false"))
}

fn unsupported(option: BlackOption, value: &toml::Value, reason: &str) -> EngineError {
    EngineError::UnsupportedOption {
        formatter: FormatterId::Black,
        option: option.as_str().to_string(),
        reason: format!("{} (got {})", reason, value),
    }
}
