//! View state of the profile + repository list screen.

use super::{non_forked, ResourceState};
use crate::models::{Profile, RepositoryList, RepositoryListItem};

/// Profile and repositories load independently; each has its own slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoListViewState {
    /// Login of the user the screen shows
    pub login: String,
    pub profile: ResourceState<Profile>,
    pub repos: ResourceState<RepositoryList>,
}

impl RepoListViewState {
    /// True while either resource is loading.
    pub fn is_loading(&self) -> bool {
        self.profile.is_loading || self.repos.is_loading
    }

    /// The profile error if any, otherwise the repository error.
    pub fn error(&self) -> Option<&str> {
        self.profile
            .error
            .as_deref()
            .or(self.repos.error.as_deref())
    }

    /// Repositories to display: stored list minus forks.
    pub fn visible_repos(&self) -> Vec<&RepositoryListItem> {
        self.repos
            .data
            .as_deref()
            .map(non_forked)
            .unwrap_or_default()
    }

    /// True once repositories loaded and none of them is an original.
    pub fn has_no_original_repos(&self) -> bool {
        self.repos.data.is_some() && self.visible_repos().is_empty()
    }
}
