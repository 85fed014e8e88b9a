//! Remote API fault type.

use thiserror::Error;

use super::FaultCategory;
use crate::traits::HttpError;

/// Failure of one remote API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFault {
    /// The transport failed; see [`HttpError`] for which faults count as
    /// network faults.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// GitHub answered with a non-2xx status.
    #[error("{}", describe_status(.status, .message))]
    Status {
        status: u16,
        /// `message` field of GitHub's error body, or the raw body
        message: Option<String>,
    },

    /// The body could not be decoded into the expected model.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Any other runtime fault.
    #[error("{0}")]
    Other(String),
}

fn describe_status(status: &u16, message: &Option<String>) -> String {
    match message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => format!("HTTP {}: {}", status, message),
        _ => format!("HTTP {}", status),
    }
}

impl ApiFault {
    /// Classify the fault.
    pub fn category(&self) -> FaultCategory {
        match self {
            ApiFault::Transport(err) if err.is_transport() => FaultCategory::Network,
            _ => FaultCategory::Application,
        }
    }

    /// True when the fault is a network fault.
    pub fn is_network(&self) -> bool {
        self.category() == FaultCategory::Network
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFault::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message, `None` when the fault carries no text.
    pub fn message(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<serde_json::Error> for ApiFault {
    fn from(err: serde_json::Error) -> Self {
        ApiFault::Decode(err.to_string())
    }
}
