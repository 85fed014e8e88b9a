//! Common test utilities for integration tests.
//!
//! JSON fixtures shaped like real GitHub payloads, and builders that wire
//! the client, repositories and stores the way the app does.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use ghbrowse::adapters::ReqwestHttpClient;
use ghbrowse::api::GithubClient;
use ghbrowse::dispatch::Dispatcher;
use ghbrowse::repository::{GithubRepoListRepository, GithubSearchUserRepository};
use ghbrowse::state::{ConnectionMonitor, RepoListStore, SearchStore};
use ghbrowse::traits::GithubApi;

/// Client pointed at a test server.
pub fn github_client(base_url: &str) -> GithubClient {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(5)).expect("http client");
    GithubClient::with_http(http).with_base_url(base_url)
}

/// Stores sharing one connection monitor, dispatching on the current runtime.
pub struct Stores {
    pub search: SearchStore,
    pub repo_list: RepoListStore,
    pub connection: ConnectionMonitor,
}

pub fn stores(api: Arc<dyn GithubApi>) -> Stores {
    let dispatcher = Dispatcher::current();
    let connection = ConnectionMonitor::new();
    let search = SearchStore::with_connection_monitor(
        Arc::new(GithubSearchUserRepository::new(
            Arc::clone(&api),
            dispatcher.clone(),
        )),
        connection.clone(),
    );
    let repo_list = RepoListStore::with_connection_monitor(
        Arc::new(GithubRepoListRepository::new(api, dispatcher)),
        connection.clone(),
    );
    Stores {
        search,
        repo_list,
        connection,
    }
}

/// A loopback URL nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn user_json(login: &str, id: u64) -> Value {
    json!({
        "login": login,
        "id": id,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{}?v=4", id),
        "gravatar_id": "",
        "url": format!("https://api.github.com/users/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "repos_url": format!("https://api.github.com/users/{}/repos", login),
        "type": "User",
        "user_view_type": "public",
        "site_admin": false,
        "score": 1.0
    })
}

pub fn search_json(logins: &[&str]) -> Value {
    let items: Vec<Value> = logins
        .iter()
        .enumerate()
        .map(|(i, login)| user_json(login, i as u64 + 1))
        .collect();
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
}

pub fn profile_json(login: &str, name: &str) -> Value {
    json!({
        "login": login,
        "id": 583231,
        "name": name,
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "hireable": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 21000,
        "following": 9,
        "type": "User",
        "site_admin": false,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-22T12:00:00Z"
    })
}

pub fn repo_json(owner: &str, name: &str, fork: bool) -> Value {
    json!({
        "id": 1296269,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "private": false,
        "owner": { "login": owner, "id": 1, "type": "User" },
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": "This your first repo!",
        "fork": fork,
        "language": "C",
        "stargazers_count": 80,
        "watchers_count": 80,
        "forks_count": 9,
        "open_issues_count": 0,
        "topics": ["octocat"],
        "visibility": "public",
        "license": null,
        "default_branch": "main",
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "pushed_at": "2011-01-26T19:06:43Z"
    })
}
