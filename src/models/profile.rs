//! User profile model (`GET /users/{login}`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of a GitHub user or organization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub twitter_username: Option<String>,
    pub hireable: Option<bool>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub repos_url: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub site_admin: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_view_type: Option<String>,
    /// ISO 8601 timestamp, kept verbatim
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Profile {
    /// Name to show in headers: the full name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.login.as_deref())
            .unwrap_or_default()
    }

    /// Account creation date as `YYYY-MM-DD`, if the timestamp parses.
    pub fn joined_on(&self) -> Option<String> {
        let created = self.created_at.as_deref()?;
        let parsed = DateTime::parse_from_rfc3339(created).ok()?;
        Some(parsed.with_timezone(&Utc).format("%Y-%m-%d").to_string())
    }
}
