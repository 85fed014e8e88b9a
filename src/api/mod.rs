//! GitHub REST API client.
//!
//! [`GithubClient`] turns the three [`GithubApi`] operations into GET
//! requests over any [`HttpClient`], attaches the standard headers to every
//! request, and maps non-2xx responses and undecodable bodies to
//! [`ApiFault`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::error::ApiFault;
use crate::models::{Profile, RepositoryList, SearchUsersResult};
use crate::traits::{GithubApi, Headers, HttpClient, HttpError, Response};

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Media type recommended by GitHub for REST v3 responses.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Value of the `User-Agent` header (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("ghbrowse/", env!("CARGO_PKG_VERSION"));

/// GitHub API client generic over the HTTP transport.
pub struct GithubClient<C: HttpClient = ReqwestHttpClient> {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Personal access token, sent as `Authorization: token <PAT>`
    token: Option<String>,
    http: C,
}

impl GithubClient<ReqwestHttpClient> {
    /// Build the production client from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
        let mut client = Self::with_http(http).with_base_url(&config.api_base_url);
        if let Some(token) = &config.token {
            client = client.with_token(token);
        }
        Ok(client)
    }
}

impl<C: HttpClient> GithubClient<C> {
    /// Create a client for `api.github.com` over the given transport.
    pub fn with_http(http: C) -> Self {
        Self {
            base_url: GITHUB_API_BASE_URL.to_string(),
            token: None,
            http,
        }
    }

    /// Use a different API root (GitHub Enterprise, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Authenticate requests with a personal access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The underlying transport.
    pub fn http(&self) -> &C {
        &self.http
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), GITHUB_ACCEPT.to_string());
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("token {}", token));
        }
        headers
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiFault> {
        let url = format!("{}{}", self.base_url, path_and_query);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url, &self.headers()).await?;
        tracing::debug!(%url, status = response.status, "response");

        if !response.is_success() {
            return Err(ApiFault::Status {
                status: response.status,
                message: error_message(&response),
            });
        }

        Ok(response.json()?)
    }
}

/// Extract the message of an error response.
///
/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`;
/// anything else falls back to the raw body text.
fn error_message(response: &Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = match response.json::<ErrorBody>() {
        Ok(ErrorBody { message }) => message,
        Err(_) => response.text().ok(),
    };

    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

impl<C: HttpClient> fmt::Debug for GithubClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl<C: HttpClient> GithubApi for GithubClient<C> {
    async fn search_users(&self, query: &str) -> Result<SearchUsersResult, ApiFault> {
        self.get_json(&format!("/search/users?q={}", urlencoding::encode(query)))
            .await
    }

    async fn profile(&self, login: &str) -> Result<Profile, ApiFault> {
        self.get_json(&format!("/users/{}", urlencoding::encode(login)))
            .await
    }

    async fn repositories(&self, login: &str) -> Result<RepositoryList, ApiFault> {
        self.get_json(&format!("/users/{}/repos", urlencoding::encode(login)))
            .await
    }
}
