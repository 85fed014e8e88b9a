//! Repository models (`GET /users/{login}/repos`).

use serde::{Deserialize, Serialize};

/// Repositories of one user, in the order the API returned them.
pub type RepositoryList = Vec<RepositoryListItem>;

/// One repository of a user's repository listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RepositoryListItem {
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub name: Option<String>,
    /// "owner/name"
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub url: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub size: Option<u64>,
    pub default_branch: Option<String>,
    pub visibility: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub topics: Vec<String>,
    /// Whether this repository is a fork of another one
    pub fork: Option<bool>,
    pub archived: Option<bool>,
    pub disabled: Option<bool>,
    pub is_template: Option<bool>,
    pub private: Option<bool>,
    pub has_issues: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_pages: Option<bool>,
    pub clone_url: Option<String>,
    pub ssh_url: Option<String>,
    pub owner: Option<Owner>,
    pub license: Option<License>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
}

impl RepositoryListItem {
    /// True only when the API flagged the repository as a fork.
    pub fn is_fork(&self) -> bool {
        self.fork == Some(true)
    }

    /// Name to show in lists: the full name, falling back to the short name.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Account owning a repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Owner {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub site_admin: Option<bool>,
}

/// License detected by GitHub.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct License {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: Option<String>,
}
