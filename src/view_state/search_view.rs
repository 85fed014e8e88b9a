//! View state of the user search screen.

use super::{error_text, filter_users_by_login};
use crate::models::{SearchUsersResult, UserSummary};
use crate::result::ApiResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchViewState {
    pub is_loading: bool,
    /// Last successful search result
    pub users: Option<SearchUsersResult>,
    pub error: Option<String>,
    /// Query of the most recent fetch, reused by retry
    pub last_query: String,
}

impl SearchViewState {
    /// Start a fetch for `query`. The previous result stays visible.
    pub fn begin(&mut self, query: &str) {
        self.is_loading = true;
        self.error = None;
        self.last_query = query.to_string();
    }

    /// Fold the outcome of a search into the state.
    pub fn apply(&mut self, result: ApiResult<SearchUsersResult>) {
        self.is_loading = false;
        self.error = error_text(&result);
        if let ApiResult::Success(users) = result {
            self.users = Some(users);
        }
    }

    /// Users of the last result whose login contains `needle`.
    pub fn visible_users(&self, needle: &str) -> Vec<&UserSummary> {
        self.users
            .as_ref()
            .map(|users| filter_users_by_login(&users.items, needle))
            .unwrap_or_default()
    }

    /// True once a search succeeded with no matches.
    pub fn is_empty_result(&self) -> bool {
        self.users
            .as_ref()
            .map(|users| users.items.is_empty())
            .unwrap_or(false)
    }
}
