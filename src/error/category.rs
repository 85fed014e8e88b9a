//! Fault category classification.

use std::fmt;

/// High-level classification of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCategory {
    /// Transport-level fault: the call failed before or instead of
    /// receiving an HTTP response.
    Network,

    /// A response was received but indicates failure, or any other
    /// runtime fault.
    Application,
}

impl FaultCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultCategory::Network => "network",
            FaultCategory::Application => "application",
        }
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
