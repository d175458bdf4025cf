//! Error types for engine operations

use pyfix_config::FormatterId;

/// Errors raised while probing for or running a formatting engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The interpreter or one of the engine modules is missing
    #[error("Formatting engines unavailable for {python}: missing {}", join_ids(.missing))]
    Unavailable {
        /// Interpreter the probe used, or a description of its absence
        python: String,
        /// Engines that could not be imported
        missing: Vec<FormatterId>,
    },

    /// The engine refused the source, typically on a syntax error
    #[error("{formatter} could not format the source: {detail}")]
    Rejected {
        formatter: FormatterId,
        /// Engine diagnostics, trimmed
        detail: String,
    },

    /// A configured option has a value the engine cannot take
    #[error("{formatter} does not support option {option}: {reason}")]
    UnsupportedOption {
        formatter: FormatterId,
        option: String,
        reason: String,
    },

    /// The engine process could not be started or fed
    #[error("Failed to run {formatter}: {source}")]
    Spawn {
        formatter: FormatterId,
        #[source]
        source: std::io::Error,
    },

    /// The engine wrote something that is not UTF-8
    #[error("{formatter} produced output that is not valid UTF-8")]
    InvalidOutput { formatter: FormatterId },
}

impl EngineError {
    /// The formatter a per-request failure belongs to.
    pub fn formatter(&self) -> Option<FormatterId> {
        match self {
            Self::Unavailable { .. } => None,
            Self::Rejected { formatter, .. }
            | Self::UnsupportedOption { formatter, .. }
            | Self::Spawn { formatter, .. }
            | Self::InvalidOutput { formatter } => Some(*formatter),
        }
    }
}

fn join_ids(ids: &[FormatterId]) -> String {
    ids.iter()
        .map(FormatterId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
