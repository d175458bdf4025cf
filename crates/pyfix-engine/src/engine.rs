//! The formatter seam

use pyfix_config::{FormatterId, ResolvedConfig};

use crate::{FormatContext, Result};

/// A formatting engine: rewrites source text without changing its meaning.
///
/// `format` takes ownership of the source and returns a new owned text,
/// so a pipeline can thread one value through several passes.
pub trait Formatter {
    /// Which formatter this is.
    fn id(&self) -> FormatterId;

    /// Format `source` under `config`.
    fn format(
        &self,
        source: String,
        config: &ResolvedConfig,
        context: &FormatContext,
    ) -> Result<String>;
}

/// The pair of engines a request runs against.
pub struct Engines {
    black: Box<dyn Formatter>,
    isort: Box<dyn Formatter>,
}

impl Engines {
    pub fn new(black: Box<dyn Formatter>, isort: Box<dyn Formatter>) -> Self {
        debug_assert_eq!(black.id(), FormatterId::Black);
        debug_assert_eq!(isort.id(), FormatterId::Isort);
        Self { black, isort }
    }

    /// The engine for `formatter`.
    pub fn get(&self, formatter: FormatterId) -> &dyn Formatter {
        match formatter {
            FormatterId::Black => self.black.as_ref(),
            FormatterId::Isort => self.isort.as_ref(),
        }
    }
}

impl std::fmt::Debug for Engines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engines")
            .field("black", &self.black.id())
            .field("isort", &self.isort.id())
            .finish()
    }
}
