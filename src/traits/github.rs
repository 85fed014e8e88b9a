//! Remote API client trait.
//!
//! The three read operations the app needs from GitHub. Implemented by
//! [`crate::api::GithubClient`] over HTTP and by
//! [`crate::adapters::mock::MockGithubApi`] in tests.

use async_trait::async_trait;

use crate::error::ApiFault;
use crate::models::{Profile, RepositoryList, SearchUsersResult};

#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Search users by keyword (`GET /search/users?q=`).
    async fn search_users(&self, query: &str) -> Result<SearchUsersResult, ApiFault>;

    /// Fetch a user's profile (`GET /users/{login}`).
    async fn profile(&self, login: &str) -> Result<Profile, ApiFault>;

    /// Fetch a user's public repositories (`GET /users/{login}/repos`).
    async fn repositories(&self, login: &str) -> Result<RepositoryList, ApiFault>;
}
