//! In-process stand-ins for the formatting engines.
//!
//! The fakes are deliberately small but keep the properties the pipeline
//! relies on:
//!
//! - each one is idempotent
//! - they do not commute: [`FakeIsort`] puts blank lines after the import
//!   block and [`FakeBlack`] removes blank lines, so the order of the passes
//!   shows in the output
//! - each honours one real option, so tests can see configuration arrive
//!
//! `"import b\nimport a\nx = 1\n"` formats to `"import a\nimport b\n\nx = 1\n"`
//! black-then-isort and to `"import a\nimport b\nx = 1\n"` isort-then-black.

use std::cell::RefCell;
use std::rc::Rc;

use pyfix_config::{BlackOption, FormatterId, ResolvedConfig};
use pyfix_engine::{EngineError, Engines, FormatContext, Formatter};

/// One recorded engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub formatter: FormatterId,
    /// Text the engine received
    pub input: String,
    /// Config the engine was given
    pub config: ResolvedConfig,
}

/// Shared record of engine invocations, in call order.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, formatter: FormatterId, input: &str, config: &ResolvedConfig) {
        self.0.borrow_mut().push(Call {
            formatter,
            input: input.to_string(),
            config: config.clone(),
        });
    }

    /// All calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// The formatters that ran, in order.
    pub fn formatters(&self) -> Vec<FormatterId> {
        self.0.borrow().iter().map(|c| c.formatter).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// A black stand-in.
///
/// Strips trailing whitespace, drops blank lines and turns single quotes
/// into double quotes unless `skip_string_normalization` is set. Source with
/// unbalanced parentheses is rejected the way a syntax error would be.
#[derive(Debug, Clone, Default)]
pub struct FakeBlack {
    log: Option<CallLog>,
}

impl FakeBlack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: &CallLog) -> Self {
        Self {
            log: Some(log.clone()),
        }
    }
}

impl Formatter for FakeBlack {
    fn id(&self) -> FormatterId {
        FormatterId::Black
    }

    fn format(
        &self,
        source: String,
        config: &ResolvedConfig,
        _context: &FormatContext,
    ) -> pyfix_engine::Result<String> {
        if let Some(log) = &self.log {
            log.record(FormatterId::Black, &source, config);
        }

        if source.matches('(').count() != source.matches(')').count() {
            return Err(EngineError::Rejected {
                formatter: FormatterId::Black,
                detail: "cannot parse: unbalanced parentheses".to_string(),
            });
        }

        let normalize_quotes = !config
            .black(BlackOption::SkipStringNormalization)
            .and_then(toml::Value::as_bool)
            .unwrap_or(false);

        let lines = source
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if normalize_quotes {
                    line.replace('\'', "\"")
                } else {
                    line.to_string()
                }
            })
            .collect();
        Ok(join_lines(lines))
    }
}

/// An isort stand-in.
///
/// Sorts and deduplicates the leading import block, splitting
/// `import a, b` into one import per line, and separates it from the rest
/// of the file with `lines_after_imports` blank lines (default 1).
#[derive(Debug, Clone, Default)]
pub struct FakeIsort {
    log: Option<CallLog>,
}

impl FakeIsort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: &CallLog) -> Self {
        Self {
            log: Some(log.clone()),
        }
    }
}

impl Formatter for FakeIsort {
    fn id(&self) -> FormatterId {
        FormatterId::Isort
    }

    fn format(
        &self,
        source: String,
        config: &ResolvedConfig,
        _context: &FormatContext,
    ) -> pyfix_engine::Result<String> {
        if let Some(log) = &self.log {
            log.record(FormatterId::Isort, &source, config);
        }

        let lines: Vec<&str> = source.lines().collect();
        let block_len = lines
            .iter()
            .take_while(|line| is_import(line) || line.trim().is_empty())
            .count();

        let mut imports: Vec<String> = lines[..block_len]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .flat_map(|line| split_import(line))
            .collect();
        if imports.is_empty() {
            return Ok(source);
        }
        imports.sort();
        imports.dedup();

        let rest = &lines[block_len..];
        let mut out = imports;
        if !rest.is_empty() {
            out.extend(std::iter::repeat_n(String::new(), lines_after_imports(config)));
            out.extend(rest.iter().map(|line| line.to_string()));
        }
        Ok(join_lines(out))
    }
}

/// A formatter that refuses every source.
#[derive(Debug, Clone)]
pub struct RejectingFormatter {
    id: FormatterId,
}

impl RejectingFormatter {
    pub fn new(id: FormatterId) -> Self {
        Self { id }
    }
}

impl Formatter for RejectingFormatter {
    fn id(&self) -> FormatterId {
        self.id
    }

    fn format(
        &self,
        _source: String,
        _config: &ResolvedConfig,
        _context: &FormatContext,
    ) -> pyfix_engine::Result<String> {
        Err(EngineError::Rejected {
            formatter: self.id,
            detail: "rejected by test formatter".to_string(),
        })
    }
}

/// A fake engine pair with no call log.
pub fn fake_engines() -> Engines {
    Engines::new(Box::new(FakeBlack::new()), Box::new(FakeIsort::new()))
}

/// A fake engine pair recording into `log`.
pub fn logged_engines(log: &CallLog) -> Engines {
    Engines::new(
        Box::new(FakeBlack::with_log(log)),
        Box::new(FakeIsort::with_log(log)),
    )
}

fn is_import(line: &str) -> bool {
    line.starts_with("import ") || line.starts_with("from ")
}

fn split_import(line: &str) -> Vec<String> {
    match line.strip_prefix("import ") {
        Some(names) => names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| format!("import {name}"))
            .collect(),
        None => vec![line.trim_end().to_string()],
    }
}

fn lines_after_imports(config: &ResolvedConfig) -> usize {
    let configured = match config.get("lines_after_imports") {
        Some(toml::Value::Integer(n)) => usize::try_from(*n).ok(),
        Some(toml::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    configured.unwrap_or(1)
}

fn join_lines(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
