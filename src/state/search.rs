//! Store behind the user search screen.

use std::sync::Arc;
use tokio::sync::watch;

use super::ConnectionMonitor;
use crate::repository::SearchUserRepository;
use crate::view_state::SearchViewState;

#[derive(Clone)]
pub struct SearchStore {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn SearchUserRepository>,
    state: watch::Sender<SearchViewState>,
    connection: Option<ConnectionMonitor>,
}

impl SearchStore {
    pub fn new(repository: Arc<dyn SearchUserRepository>) -> Self {
        Self::build(repository, None)
    }

    /// Report every completed call to `monitor`.
    pub fn with_connection_monitor(
        repository: Arc<dyn SearchUserRepository>,
        monitor: ConnectionMonitor,
    ) -> Self {
        Self::build(repository, Some(monitor))
    }

    fn build(repository: Arc<dyn SearchUserRepository>, connection: Option<ConnectionMonitor>) -> Self {
        let (state, _) = watch::channel(SearchViewState::default());
        Self {
            inner: Arc::new(Inner {
                repository,
                state,
                connection,
            }),
        }
    }

    /// Search users matching `query` and fold the outcome into the state.
    ///
    /// The query is not validated; an empty query is sent as-is.
    pub async fn fetch(&self, query: &str) {
        tracing::debug!(query, "Searching users");
        self.inner.state.send_modify(|state| state.begin(query));

        let result = self.inner.repository.search_users(query).await;

        if let Some(connection) = &self.inner.connection {
            connection.record(&result);
        }
        self.inner.state.send_modify(|state| state.apply(result));
    }

    /// Repeat the last search.
    ///
    /// Without a previous query this only clears the loading flag.
    pub async fn retry(&self) {
        let last_query = self.inner.state.borrow().last_query.clone();
        if last_query.is_empty() {
            self.inner
                .state
                .send_if_modified(|state| std::mem::replace(&mut state.is_loading, false));
            return;
        }
        self.fetch(&last_query).await;
    }

    /// Current snapshot.
    pub fn state(&self) -> SearchViewState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchViewState> {
        self.inner.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{ApiCall, MockGithubApi};
    use crate::dispatch::Dispatcher;
    use crate::models::{SearchUsersResult, UserSummary};
    use crate::repository::GithubSearchUserRepository;
    use crate::traits::HttpError;
    use crate::view_state::ConnectionState;

    fn store(api: &MockGithubApi) -> SearchStore {
        SearchStore::new(Arc::new(GithubSearchUserRepository::new(
            Arc::new(api.clone()),
            Dispatcher::inline(),
        )))
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let api = MockGithubApi::new();
        let users = SearchUsersResult::from_items(vec![UserSummary::with_login("octocat")]);
        api.set_search("octocat", Ok(users.clone()));
        let store = store(&api);

        store.fetch("octocat").await;

        let state = store.state();
        assert!(!state.is_loading);
        assert_eq!(state.users, Some(users));
        assert_eq!(state.error, None);
        assert_eq!(state.last_query, "octocat");
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        let api = MockGithubApi::new();
        api.set_search("ghost", Err(HttpError::Timeout("40s".into()).into()));
        let store = store(&api);

        store.fetch("ghost").await;

        let state = store.state();
        assert!(!state.is_loading);
        assert!(state.users.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Network error: Request timeout: 40s")
        );
    }

    #[tokio::test]
    async fn test_retry_without_query_does_not_call() {
        let api = MockGithubApi::new();
        let store = store(&api);
        let mut rx = store.subscribe();

        store.retry().await;

        assert_eq!(api.call_count(), 0);
        assert_eq!(store.state(), SearchViewState::default());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_retry_only_clears_loading_without_query() {
        let api = MockGithubApi::new();
        let store = store(&api);
        store.inner.state.send_modify(|state| state.is_loading = true);

        store.retry().await;

        assert!(!store.state().is_loading);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_retry_repeats_last_query() {
        let api = MockGithubApi::new();
        api.set_search("rust", Err(HttpError::ConnectionFailed("down".into()).into()));
        let store = store(&api);

        store.fetch("rust").await;
        api.set_search("rust", Ok(SearchUsersResult::default()));
        store.retry().await;

        assert_eq!(
            api.calls(),
            vec![
                ApiCall::SearchUsers("rust".into()),
                ApiCall::SearchUsers("rust".into()),
            ]
        );
        let state = store.state();
        assert_eq!(state.error, None);
        assert!(state.is_empty_result());
    }

    #[tokio::test]
    async fn test_connection_monitor() {
        let api = MockGithubApi::new();
        api.set_search("ghost", Err(HttpError::ConnectionFailed("refused".into()).into()));
        let monitor = ConnectionMonitor::new();
        let store = SearchStore::with_connection_monitor(
            Arc::new(GithubSearchUserRepository::new(
                Arc::new(api.clone()),
                Dispatcher::inline(),
            )),
            monitor.clone(),
        );

        store.fetch("ghost").await;
        assert_eq!(monitor.current(), ConnectionState::Unavailable);
    }
}
