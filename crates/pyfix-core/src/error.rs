//! Error types for pyfix-core

use pyfix_config::FormatterId;
use pyfix_engine::EngineError;

/// Result type for pyfix-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// black or isort cannot be run at all
    #[error("You must install isort and black for {python}")]
    EnvironmentUnavailable {
        python: String,
        missing: Vec<FormatterId>,
    },

    /// The request named an operation with no handler
    #[error("Unknown command {0}")]
    UnknownOperation(String),

    /// An operation was registered twice
    #[error("Operation {0} is already registered")]
    DuplicateOperation(String),

    /// The request could not be decoded or lacks a required field
    #[error("{0}")]
    InvalidRequest(String),

    // Transparent wrappers for underlying crate errors
    /// Configuration could not be read or parsed
    #[error(transparent)]
    Config(#[from] pyfix_config::Error),

    /// An engine failed on this request
    #[error(transparent)]
    Engine(EngineError),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unavailable { python, missing } => {
                Self::EnvironmentUnavailable { python, missing }
            }
            other => Self::Engine(other),
        }
    }
}

impl Error {
    pub fn invalid_request(message: impl std::fmt::Display) -> Self {
        Self::InvalidRequest(message.to_string())
    }

    /// Short code placed in the `message` field of an error reply.
    pub fn code(&self) -> String {
        match self {
            Self::EnvironmentUnavailable { .. } => "black/isort not found".to_string(),
            Self::UnknownOperation(name) => name.clone(),
            Self::DuplicateOperation(_) => "internal error".to_string(),
            Self::InvalidRequest(_) | Self::Json(_) => "invalid request".to_string(),
            Self::Config(_) => "config error".to_string(),
            Self::Engine(err) => match err.formatter() {
                Some(formatter) => format!("{} failed", formatter),
                None => "engine error".to_string(),
            },
            Self::Io(_) => "io error".to_string(),
        }
    }
}
