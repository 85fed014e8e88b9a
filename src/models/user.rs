//! User search models (`GET /search/users`).

use serde::{Deserialize, Serialize};

/// Response of the user search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchUsersResult {
    /// Total number of matches on the server (not the page size)
    pub total_count: Option<u64>,

    /// Whether the search timed out before all matches were found
    pub incomplete_results: Option<bool>,

    /// Matches in the order GitHub ranked them
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub items: Vec<UserSummary>,
}

impl SearchUsersResult {
    /// Build a complete result from a list of users.
    pub fn from_items(items: Vec<UserSummary>) -> Self {
        Self {
            total_count: Some(items.len() as u64),
            incomplete_results: Some(false),
            items,
        }
    }
}

/// A single user entry of a search result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserSummary {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub repos_url: Option<String>,
    /// "User" or "Organization"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_view_type: Option<String>,
    pub site_admin: Option<bool>,
    /// Search relevance score
    pub score: Option<f64>,
}

impl UserSummary {
    /// Create a summary carrying only a login.
    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..Self::default()
        }
    }
}
