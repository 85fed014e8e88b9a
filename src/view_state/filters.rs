//! Display-time filters. They borrow from the stored lists and never
//! modify them.

use crate::models::{RepositoryListItem, UserSummary};

/// Repositories that are not forks, in their original order.
///
/// Items without a `fork` flag count as originals.
pub fn non_forked(repos: &[RepositoryListItem]) -> Vec<&RepositoryListItem> {
    repos.iter().filter(|repo| !repo.is_fork()).collect()
}

/// Users whose login contains `needle`, ignoring case.
///
/// An empty needle keeps every user; users without a login are dropped
/// by any non-empty needle.
pub fn filter_users_by_login<'a>(users: &'a [UserSummary], needle: &str) -> Vec<&'a UserSummary> {
    if needle.is_empty() {
        return users.iter().collect();
    }
    let needle = needle.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.login
                .as_deref()
                .map(|login| login.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}
