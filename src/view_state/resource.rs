//! Loading/data/error slice of a single remote resource.

use super::error_text;
use crate::result::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// Enter the loading state. Previous data stays visible.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Fold the outcome of a call into this slice.
    pub fn apply(&mut self, result: ApiResult<T>) {
        self.is_loading = false;
        self.error = error_text(&result);
        if let ApiResult::Success(data) = result {
            self.data = Some(data);
        }
    }

    /// Clear the loading flag. Returns whether anything changed.
    pub fn stop_loading(&mut self) -> bool {
        std::mem::replace(&mut self.is_loading, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorInfo;

    #[test]
    fn test_success_then_error_keeps_data() {
        let mut state = ResourceState::default();

        state.begin();
        assert!(state.is_loading);
        state.apply(ApiResult::Success(vec![1, 2]));
        assert_eq!(state.data, Some(vec![1, 2]));
        assert_eq!(state.error, None);

        state.begin();
        state.apply(ApiResult::NetworkError(ErrorInfo::new("reset")));
        assert!(!state.is_loading);
        assert_eq!(state.data, Some(vec![1, 2]));
        assert_eq!(state.error.as_deref(), Some("Network error: reset"));

        state.begin();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stop_loading() {
        let mut state = ResourceState::<u8>::default();
        assert!(!state.stop_loading());
        state.begin();
        assert!(state.stop_loading());
        assert!(!state.is_loading);
    }
}
