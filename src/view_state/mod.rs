//! View state for the two screens.
//!
//! Snapshots in this module are plain data: the stores in [`crate::state`]
//! own and update them, screens only read them. Every update goes through
//! one fold from an [`ApiResult`]:
//!
//! | Outcome        | `is_loading` | data      | `error`                          |
//! |----------------|--------------|-----------|----------------------------------|
//! | `Success`      | false        | replaced  | `None`                           |
//! | `Error`        | false        | unchanged | message or `"Unknown error"`     |
//! | `NetworkError` | false        | unchanged | `"Network error: "` + message    |
//!
//! ## Components
//!
//! - [`SearchViewState`]: user search screen
//! - [`RepoListViewState`]: profile + repository list screen
//! - [`ResourceState`]: loading/data/error slice of one resource
//! - [`ConnectionState`]: whether the last call reached GitHub
//! - [`non_forked`], [`filter_users_by_login`]: display-time filters

mod connection;
mod filters;
mod repo_list_view;
mod resource;
mod search_view;

pub use connection::ConnectionState;
pub use filters::{filter_users_by_login, non_forked};
pub use repo_list_view::RepoListViewState;
pub use resource::ResourceState;
pub use search_view::SearchViewState;

use crate::result::ApiResult;

/// Prefix of the error text shown for network faults.
pub const NETWORK_ERROR_PREFIX: &str = "Network error: ";

/// Error text a failed outcome leaves in the view state.
pub fn error_text<T>(result: &ApiResult<T>) -> Option<String> {
    match result {
        ApiResult::Success(_) => None,
        ApiResult::Error(info) => Some(info.message_or_default().to_string()),
        ApiResult::NetworkError(info) => Some(format!(
            "{}{}",
            NETWORK_ERROR_PREFIX,
            info.message_or_default()
        )),
    }
}
