//! Profile and repository-list repository.

use std::sync::Arc;

use super::classify;
use crate::dispatch::{Dispatcher, Pending};
use crate::models::{Profile, RepositoryList};
use crate::traits::GithubApi;

/// Loads the data of one user's screen.
pub trait RepoListRepository: Send + Sync {
    fn profile(&self, login: &str) -> Pending<Profile>;

    /// All public repositories, forks included.
    fn repos(&self, login: &str) -> Pending<RepositoryList>;
}

/// [`RepoListRepository`] backed by a [`GithubApi`].
#[derive(Clone)]
pub struct GithubRepoListRepository {
    api: Arc<dyn GithubApi>,
    dispatcher: Dispatcher,
}

impl GithubRepoListRepository {
    pub fn new(api: Arc<dyn GithubApi>, dispatcher: Dispatcher) -> Self {
        Self { api, dispatcher }
    }
}

impl RepoListRepository for GithubRepoListRepository {
    fn profile(&self, login: &str) -> Pending<Profile> {
        let api = Arc::clone(&self.api);
        let login = login.to_string();
        self.dispatcher.dispatch(async move {
            let outcome = api.profile(&login).await;
            classify("profile", &login, outcome)
        })
    }

    fn repos(&self, login: &str) -> Pending<RepositoryList> {
        let api = Arc::clone(&self.api);
        let login = login.to_string();
        self.dispatcher.dispatch(async move {
            let outcome = api.repositories(&login).await;
            classify("repositories", &login, outcome)
        })
    }
}
