//! The two-pass format pipeline

use pyfix_config::{ConfigStore, FormatterId, ResolvedConfig};
use pyfix_engine::{Engines, FormatContext};

use crate::Result;

/// Which formatter runs first.
///
/// black and isort disagree about import layout, so the two orders can give
/// different results and the caller picks one per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOrder {
    BlackThenIsort,
    IsortThenBlack,
}

impl RunOrder {
    /// The formatters in the order they run.
    pub fn passes(self) -> [FormatterId; 2] {
        match self {
            Self::BlackThenIsort => [FormatterId::Black, FormatterId::Isort],
            Self::IsortThenBlack => [FormatterId::Isort, FormatterId::Black],
        }
    }
}

impl From<bool> for RunOrder {
    /// Maps the request's `black_then_isort` flag.
    fn from(black_then_isort: bool) -> Self {
        if black_then_isort {
            Self::BlackThenIsort
        } else {
            Self::IsortThenBlack
        }
    }
}

/// Runs both formatters over one text, honouring the skip policy.
pub struct FormatPipeline<'a> {
    engines: &'a Engines,
}

impl<'a> FormatPipeline<'a> {
    pub fn new(engines: &'a Engines) -> Self {
        Self { engines }
    }

    /// Format `text` in the project at `context.root`.
    ///
    /// Both configs are resolved before any engine runs, so a broken config
    /// file fails the request without formatting anything. A formatter whose
    /// config is not [`present`](ResolvedConfig::present) is skipped when
    /// `require_present_config` is set. Each pass takes the text by value and
    /// hands a new one to the next; the first failing pass ends the request.
    pub fn apply(
        &self,
        text: String,
        order: RunOrder,
        require_present_config: bool,
        context: &FormatContext,
    ) -> Result<String> {
        let store = ConfigStore::open(context.root.clone())?;
        let black = store.resolve(FormatterId::Black)?;
        let isort = store.resolve(FormatterId::Isort)?;

        let mut text = text;
        for formatter in order.passes() {
            let config = match formatter {
                FormatterId::Black => &black,
                FormatterId::Isort => &isort,
            };
            text = self.run_pass(formatter, config, text, require_present_config, context)?;
        }
        Ok(text)
    }

    fn run_pass(
        &self,
        formatter: FormatterId,
        config: &ResolvedConfig,
        text: String,
        require_present_config: bool,
        context: &FormatContext,
    ) -> Result<String> {
        if !config.is_active(require_present_config) {
            tracing::debug!(%formatter, "No project config, skipping pass");
            return Ok(text);
        }

        tracing::info!(
            %formatter,
            source = ?config.source,
            options = config.options.len(),
            "Running format pass"
        );
        self.engines
            .get(formatter)
            .format(text, config, context)
            .map_err(|err| {
                tracing::warn!(%formatter, error = %err, "Format pass failed");
                err.into()
            })
    }
}
