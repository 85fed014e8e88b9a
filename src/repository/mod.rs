//! Repository layer between the GitHub API client and the stores.
//!
//! A repository runs one remote call on its [`Dispatcher`] and classifies
//! the outcome into an [`ApiResult`]. Faults stop here: callers only ever
//! see `Success`, `Error` or `NetworkError`.
//!
//! Repositories are stateless (no caching, no retry) and cheap to share.

mod repo_list;
mod search;

pub use repo_list::{GithubRepoListRepository, RepoListRepository};
pub use search::{GithubSearchUserRepository, SearchUserRepository};

use crate::error::{ApiFault, FaultCategory};
use crate::result::ApiResult;

/// Log a failed call and classify its outcome.
fn classify<T>(operation: &'static str, subject: &str, outcome: Result<T, ApiFault>) -> ApiResult<T> {
    if let Err(fault) = &outcome {
        match fault.category() {
            FaultCategory::Network => {
                tracing::warn!(operation, subject, error = %fault, "Network fault")
            }
            FaultCategory::Application => {
                tracing::error!(operation, subject, error = %fault, "Request failed")
            }
        }
    }
    ApiResult::from_outcome(outcome)
}
