//! Mock GitHub API for testing.
//!
//! Outcomes are scripted per query (search) or per login (profile and
//! repositories). Every call is recorded so tests can assert which calls
//! were made and with what argument.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ApiFault;
use crate::models::{Profile, RepositoryList, SearchUsersResult};
use crate::traits::GithubApi;

/// A call made against [`MockGithubApi`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiCall {
    SearchUsers(String),
    Profile(String),
    Repositories(String),
}

type Outcomes<T> = Arc<Mutex<HashMap<String, Result<T, ApiFault>>>>;

/// Scripted [`GithubApi`] implementation.
///
/// Unscripted calls fail with an application fault naming the call.
#[derive(Debug, Clone, Default)]
pub struct MockGithubApi {
    searches: Outcomes<SearchUsersResult>,
    profiles: Outcomes<Profile>,
    repositories: Outcomes<RepositoryList>,
    /// Artificial latency per call, for overlap tests
    delays: Arc<Mutex<HashMap<ApiCall, Duration>>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl MockGithubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of `search_users(query)`.
    pub fn set_search(&self, query: &str, outcome: Result<SearchUsersResult, ApiFault>) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), outcome);
    }

    /// Script the outcome of `profile(login)`.
    pub fn set_profile(&self, login: &str, outcome: Result<Profile, ApiFault>) {
        self.profiles
            .lock()
            .unwrap()
            .insert(login.to_string(), outcome);
    }

    /// Script the outcome of `repositories(login)`.
    pub fn set_repositories(&self, login: &str, outcome: Result<RepositoryList, ApiFault>) {
        self.repositories
            .lock()
            .unwrap()
            .insert(login.to_string(), outcome);
    }

    /// Delay the given call by `delay` before it resolves.
    pub fn set_delay(&self, call: ApiCall, delay: Duration) {
        self.delays.lock().unwrap().insert(call, delay);
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn record(&self, call: ApiCall) {
        let delay = self.delays.lock().unwrap().get(&call).copied();
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn lookup<T: Clone>(outcomes: &Outcomes<T>, key: &str, what: &str) -> Result<T, ApiFault> {
        outcomes
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(ApiFault::Other(format!("No mock {} for {:?}", what, key))))
    }
}

#[async_trait]
impl GithubApi for MockGithubApi {
    async fn search_users(&self, query: &str) -> Result<SearchUsersResult, ApiFault> {
        self.record(ApiCall::SearchUsers(query.to_string())).await;
        Self::lookup(&self.searches, query, "search")
    }

    async fn profile(&self, login: &str) -> Result<Profile, ApiFault> {
        self.record(ApiCall::Profile(login.to_string())).await;
        Self::lookup(&self.profiles, login, "profile")
    }

    async fn repositories(&self, login: &str) -> Result<RepositoryList, ApiFault> {
        self.record(ApiCall::Repositories(login.to_string())).await;
        Self::lookup(&self.repositories, login, "repositories")
    }
}
