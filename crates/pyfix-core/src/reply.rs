//! The single JSON object a request produces

use serde::{Deserialize, Serialize};

use crate::Error;

/// Level of a notification reply. Only errors are ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
}

/// Reply to a request.
///
/// Serialized untagged, so the wire shape is either `{"file": ...}` or
/// `{"notification": "error", "message": ..., "detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    /// The formatted source
    File { file: String },

    /// A failure, reported in-band
    Notification {
        notification: NotificationLevel,
        message: String,
        detail: String,
    },
}

impl Reply {
    pub fn file(text: impl Into<String>) -> Self {
        Self::File { file: text.into() }
    }

    pub fn error(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Notification {
            notification: NotificationLevel::Error,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Notification { .. })
    }
}

impl From<&Error> for Reply {
    fn from(err: &Error) -> Self {
        Reply::error(err.code(), err.to_string())
    }
}
