//! Outcome of one remote call, normalized for the view-state stores.
//!
//! [`ApiResult`] is a closed three-way sum: a payload, an application-level
//! error, or a network error. It is built once per call completion with
//! [`ApiResult::from_outcome`] and consumed by exactly one fold in a store.

use std::fmt;

use crate::error::{ApiFault, FaultCategory};

/// Message used when a fault carries no text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Description of a failed call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human-readable message, if the fault had one
    pub message: Option<String>,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
}

impl ErrorInfo {
    /// Create an error description from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    /// Create an error description without any message.
    pub fn without_message() -> Self {
        Self::default()
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The message, or [`UNKNOWN_ERROR`] when absent.
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}

impl From<&ApiFault> for ErrorInfo {
    fn from(fault: &ApiFault) -> Self {
        Self {
            message: fault.message(),
            status: fault.status(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_or_default())
    }
}

/// Result of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// The call returned a parsed payload.
    Success(T),
    /// The call failed with an application-level fault.
    Error(ErrorInfo),
    /// The call failed with a transport-level fault.
    NetworkError(ErrorInfo),
}

impl<T> ApiResult<T> {
    /// Classify the outcome of one call attempt.
    pub fn from_outcome(outcome: Result<T, ApiFault>) -> Self {
        match outcome {
            Ok(data) => ApiResult::Success(data),
            Err(fault) => Self::from_fault(&fault),
        }
    }

    /// Classify a fault.
    pub fn from_fault(fault: &ApiFault) -> Self {
        let info = ErrorInfo::from(fault);
        match fault.category() {
            FaultCategory::Network => ApiResult::NetworkError(info),
            FaultCategory::Application => ApiResult::Error(info),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error(_))
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiResult::NetworkError(_))
    }

    /// Borrow the payload of a successful call.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Error(_) | ApiResult::NetworkError(_) => None,
        }
    }

    /// Take the payload of a successful call.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Error(_) | ApiResult::NetworkError(_) => None,
        }
    }

    /// Borrow the error description of a failed call.
    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Error(info) | ApiResult::NetworkError(info) => Some(info),
        }
    }

    /// Map the payload, keeping failures as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => ApiResult::Success(f(data)),
            ApiResult::Error(info) => ApiResult::Error(info),
            ApiResult::NetworkError(info) => ApiResult::NetworkError(info),
        }
    }
}
