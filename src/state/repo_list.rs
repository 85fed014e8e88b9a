//! Store behind the profile + repository list screen.

use std::sync::Arc;
use tokio::sync::watch;

use super::ConnectionMonitor;
use crate::repository::RepoListRepository;
use crate::view_state::RepoListViewState;

#[derive(Clone)]
pub struct RepoListStore {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn RepoListRepository>,
    state: watch::Sender<RepoListViewState>,
    connection: Option<ConnectionMonitor>,
}

impl RepoListStore {
    pub fn new(repository: Arc<dyn RepoListRepository>) -> Self {
        Self::build(repository, None)
    }

    /// Report every completed call to `monitor`.
    pub fn with_connection_monitor(
        repository: Arc<dyn RepoListRepository>,
        monitor: ConnectionMonitor,
    ) -> Self {
        Self::build(repository, Some(monitor))
    }

    fn build(repository: Arc<dyn RepoListRepository>, connection: Option<ConnectionMonitor>) -> Self {
        let (state, _) = watch::channel(RepoListViewState::default());
        Self {
            inner: Arc::new(Inner {
                repository,
                state,
                connection,
            }),
        }
    }

    /// Switching to another login drops the previous user's data.
    ///
    /// Completions are only folded while their login is still current, so a
    /// late response for a previous login never reaches the new screen.
    fn switch_to(state: &mut RepoListViewState, login: &str) {
        if state.login != login {
            *state = RepoListViewState {
                login: login.to_string(),
                ..Default::default()
            };
        }
    }

    pub async fn fetch_profile(&self, login: &str) {
        self.inner.state.send_modify(|state| {
            Self::switch_to(state, login);
            state.profile.begin();
        });

        let result = self.inner.repository.profile(login).await;

        if let Some(connection) = &self.inner.connection {
            connection.record(&result);
        }
        self.inner.state.send_if_modified(|state| {
            if state.login != login {
                tracing::debug!(login, current = %state.login, "Dropping profile of previous login");
                return false;
            }
            state.profile.apply(result);
            true
        });
    }

    pub async fn fetch_repos(&self, login: &str) {
        self.inner.state.send_modify(|state| {
            Self::switch_to(state, login);
            state.repos.begin();
        });

        let result = self.inner.repository.repos(login).await;

        if let Some(connection) = &self.inner.connection {
            connection.record(&result);
        }
        self.inner.state.send_if_modified(|state| {
            if state.login != login {
                tracing::debug!(login, current = %state.login, "Dropping repositories of previous login");
                return false;
            }
            state.repos.apply(result);
            true
        });
    }

    /// Fetch profile and repositories concurrently.
    pub async fn load(&self, login: &str) {
        tracing::debug!(login, "Loading user screen");
        futures::join!(self.fetch_profile(login), self.fetch_repos(login));
    }

    /// Reload the current login.
    ///
    /// Without a login this only clears the loading flags.
    pub async fn retry(&self) {
        let login = self.inner.state.borrow().login.clone();
        if login.is_empty() {
            self.inner.state.send_if_modified(|state| {
                let profile = state.profile.stop_loading();
                let repos = state.repos.stop_loading();
                profile || repos
            });
            return;
        }
        self.load(&login).await;
    }

    /// Current snapshot.
    pub fn state(&self) -> RepoListViewState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RepoListViewState> {
        self.inner.state.subscribe()
    }
}
