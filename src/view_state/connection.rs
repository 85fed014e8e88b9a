//! Connectivity as observed from the last completed call.

use crate::result::ApiResult;

/// Whether GitHub was reachable on the last completed call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Available,
    Unavailable,
}

impl ConnectionState {
    /// Connectivity implied by an outcome: any response means the
    /// network works, only a network fault means it does not.
    pub fn after<T>(result: &ApiResult<T>) -> Self {
        match result {
            ApiResult::NetworkError(_) => ConnectionState::Unavailable,
            ApiResult::Success(_) | ApiResult::Error(_) => ConnectionState::Available,
        }
    }

    pub fn is_available(self) -> bool {
        self == ConnectionState::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorInfo;

    #[test]
    fn test_after() {
        assert_eq!(ConnectionState::default(), ConnectionState::Available);
        assert!(ConnectionState::after(&ApiResult::Success(())).is_available());
        assert!(ConnectionState::after::<()>(&ApiResult::Error(ErrorInfo::new("404"))).is_available());
        assert_eq!(
            ConnectionState::after::<()>(&ApiResult::NetworkError(ErrorInfo::new("refused"))),
            ConnectionState::Unavailable
        );
    }
}
