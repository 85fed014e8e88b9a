//! User search repository.

use std::sync::Arc;

use super::classify;
use crate::dispatch::{Dispatcher, Pending};
use crate::models::SearchUsersResult;
use crate::traits::GithubApi;

/// Searches GitHub users by keyword.
pub trait SearchUserRepository: Send + Sync {
    fn search_users(&self, query: &str) -> Pending<SearchUsersResult>;
}

/// [`SearchUserRepository`] backed by a [`GithubApi`].
#[derive(Clone)]
pub struct GithubSearchUserRepository {
    api: Arc<dyn GithubApi>,
    dispatcher: Dispatcher,
}

impl GithubSearchUserRepository {
    pub fn new(api: Arc<dyn GithubApi>, dispatcher: Dispatcher) -> Self {
        Self { api, dispatcher }
    }
}

impl SearchUserRepository for GithubSearchUserRepository {
    fn search_users(&self, query: &str) -> Pending<SearchUsersResult> {
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        self.dispatcher.dispatch(async move {
            let outcome = api.search_users(&query).await;
            classify("search_users", &query, outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{ApiCall, MockGithubApi};
    use crate::error::ApiFault;
    use crate::models::UserSummary;
    use crate::result::ApiResult;
    use crate::traits::HttpError;

    fn repository(api: &MockGithubApi) -> GithubSearchUserRepository {
        GithubSearchUserRepository::new(Arc::new(api.clone()), Dispatcher::inline())
    }

    #[tokio::test]
    async fn test_success() {
        let api = MockGithubApi::new();
        let users = SearchUsersResult::from_items(vec![UserSummary::with_login("octocat")]);
        api.set_search("octocat", Ok(users.clone()));

        let result = repository(&api).search_users("octocat").await;

        assert_eq!(result, ApiResult::Success(users));
        assert_eq!(api.calls(), vec![ApiCall::SearchUsers("octocat".into())]);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let api = MockGithubApi::new();
        api.set_search(
            "ghost",
            Err(HttpError::ConnectionFailed("connection refused".into()).into()),
        );

        let result = repository(&api).search_users("ghost").await;

        assert!(result.is_network_error());
        assert_eq!(
            result.error_info().unwrap().message.as_deref(),
            Some("Connection failed: connection refused")
        );
    }

    #[tokio::test]
    async fn test_status_is_error() {
        let api = MockGithubApi::new();
        api.set_search(
            "",
            Err(ApiFault::Status {
                status: 422,
                message: Some("Validation Failed".into()),
            }),
        );

        let result = repository(&api).search_users("").await;

        assert!(result.is_error());
        assert_eq!(result.error_info().unwrap().status, Some(422));
        // Empty queries are forwarded as-is
        assert_eq!(api.calls(), vec![ApiCall::SearchUsers(String::new())]);
    }

    #[tokio::test]
    async fn test_spawned_on_runtime() {
        let api = MockGithubApi::new();
        api.set_search("rust", Ok(SearchUsersResult::default()));
        let repository = GithubSearchUserRepository::new(Arc::new(api.clone()), Dispatcher::current());

        let result = repository.search_users("rust").await;
        assert!(result.is_success());
    }
}
