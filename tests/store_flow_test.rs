//! Full pipeline tests: HTTP server -> client -> repositories -> stores.

mod common;

use std::sync::Arc;

use common::{
    closed_port_url, github_client, profile_json, repo_json, search_json, stores,
};
use ghbrowse::adapters::MockGithubApi;
use ghbrowse::models::{RepositoryListItem, SearchUsersResult};
use ghbrowse::traits::HttpError;
use ghbrowse::view_state::ConnectionState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_success_populates_users() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", "octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_json(&["octocat"])))
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.search.fetch("octocat").await;

    let state = s.search.state();
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.last_query, "octocat");
    let logins: Vec<_> = state
        .visible_users("")
        .into_iter()
        .filter_map(|u| u.login.clone())
        .collect();
    assert_eq!(logins, vec!["octocat"]);
    assert_eq!(s.connection.current(), ConnectionState::Available);
}

#[tokio::test]
async fn test_connection_refused_sets_network_error() {
    let s = stores(Arc::new(github_client(&closed_port_url().await)));
    s.search.fetch("ghost").await;

    let state = s.search.state();
    assert!(!state.is_loading);
    assert!(state.users.is_none());
    let error = state.error.expect("error text");
    assert!(
        error.starts_with("Network error: Connection failed"),
        "unexpected error: {}",
        error
    );
    assert_eq!(s.connection.current(), ConnectionState::Unavailable);
}

#[tokio::test]
async fn test_application_error_keeps_previous_users() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", "octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_json(&["octocat"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Validation Failed",
            "errors": [{ "resource": "Search", "field": "q", "code": "missing" }]
        })))
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.search.fetch("octocat").await;
    s.search.fetch("").await;

    let state = s.search.state();
    assert_eq!(state.error.as_deref(), Some("HTTP 422: Validation Failed"));
    assert_eq!(state.visible_users("").len(), 1);
    assert_eq!(state.last_query, "");
    assert_eq!(s.connection.current(), ConnectionState::Available);
}

#[tokio::test]
async fn test_retry_after_server_recovers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_json(&["rust-lang"])))
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.search.fetch("rust").await;
    assert_eq!(s.search.state().error.as_deref(), Some("HTTP 503"));

    s.search.retry().await;

    let state = s.search.state();
    assert!(state.error.is_none());
    assert_eq!(state.visible_users("").len(), 1);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retry_without_query_sends_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.search.retry().await;
    s.repo_list.retry().await;

    assert!(!s.search.state().is_loading);
    assert!(!s.repo_list.state().is_loading());
}

#[tokio::test]
async fn test_user_with_only_forks_shows_no_repositories() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/torvalds"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(profile_json("torvalds", "Linus Torvalds")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/torvalds/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([repo_json("torvalds", "subsurface", true)])),
        )
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.repo_list.load("torvalds").await;

    let state = s.repo_list.state();
    assert_eq!(state.login, "torvalds");
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(
        state.profile.data.as_ref().map(|p| p.display_name()),
        Some("Linus Torvalds")
    );
    assert_eq!(state.repos.data.as_ref().map(Vec::len), Some(1));
    assert!(state.visible_repos().is_empty());
    assert!(state.has_no_original_repos());
}

#[tokio::test]
async fn test_profile_and_repos_fail_independently() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("octocat", "The Octocat")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let s = stores(Arc::new(github_client(&mock_server.uri())));
    s.repo_list.load("octocat").await;

    let state = s.repo_list.state();
    assert!(state.profile.data.is_some());
    assert!(state.profile.error.is_none());
    assert!(state.repos.data.is_none());
    assert_eq!(state.repos.error.as_deref(), Some("HTTP 500: boom"));
    assert_eq!(state.error(), Some("HTTP 500: boom"));
}

#[tokio::test]
async fn test_visible_repos_drop_exactly_the_forks() {
    let compositions: &[(usize, usize)] = &[(0, 0), (3, 0), (0, 3), (5, 2), (1, 1)];

    for &(originals, forks) in compositions {
        let mut repos: Vec<RepositoryListItem> = Vec::new();
        for i in 0..originals.max(forks) {
            if i < forks {
                repos.push(RepositoryListItem {
                    name: Some(format!("fork-{}", i)),
                    fork: Some(true),
                    ..Default::default()
                });
            }
            if i < originals {
                repos.push(RepositoryListItem {
                    name: Some(format!("orig-{}", i)),
                    fork: if i % 2 == 0 { Some(false) } else { None },
                    ..Default::default()
                });
            }
        }

        let api = MockGithubApi::new();
        api.set_repositories("someone", Ok(repos));
        let s = stores(Arc::new(api));
        s.repo_list.fetch_repos("someone").await;

        let state = s.repo_list.state();
        let visible: Vec<_> = state
            .visible_repos()
            .into_iter()
            .filter_map(|r| r.name.clone())
            .collect();
        let expected: Vec<_> = (0..originals).map(|i| format!("orig-{}", i)).collect();

        assert_eq!(state.repos.data.as_ref().map(Vec::len), Some(originals + forks));
        assert_eq!(visible, expected, "originals={} forks={}", originals, forks);
    }
}

#[tokio::test]
async fn test_connection_recovers_after_success() {
    let api = MockGithubApi::new();
    api.set_search(
        "ghost",
        Err(HttpError::ConnectionFailed("connection refused".into()).into()),
    );
    let s = stores(Arc::new(api.clone()));
    let mut changes = s.connection.subscribe();

    s.search.fetch("ghost").await;
    assert_eq!(s.connection.current(), ConnectionState::Unavailable);
    assert!(changes.has_changed().unwrap());
    changes.borrow_and_update();

    api.set_profile("ghost", Err(HttpError::Timeout("30s".into()).into()));
    s.repo_list.fetch_profile("ghost").await;
    assert!(!changes.has_changed().unwrap());

    api.set_search("ghost", Ok(SearchUsersResult::default()));
    s.search.retry().await;

    assert_eq!(s.connection.current(), ConnectionState::Available);
    assert!(s.search.state().error.is_none());
    assert_eq!(s.repo_list.state().profile.error.as_deref(), Some("Network error: Request timeout: 30s"));
}
