//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which part of the search screen has focus
//!
//! `App` never talks to the network itself. It asks the stores to fetch,
//! on background tasks, and reads their snapshots when rendering.

mod handlers;
mod navigation;
mod types;

pub use types::{Focus, Screen};

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::GithubClient;
use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::models::{RepositoryListItem, UserSummary};
use crate::repository::{GithubRepoListRepository, GithubSearchUserRepository};
use crate::state::{ConnectionMonitor, RepoListStore, SearchStore};
use crate::traits::GithubApi;
use crate::view_state::{ConnectionState, RepoListViewState, SearchViewState};

/// Opens a URL outside the terminal (browser).
pub type UrlOpener = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

/// Main application state
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Focus on the search screen
    pub focus: Focus,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Search input
    pub query: String,
    /// Local narrow-down filter on the loaded users' logins
    pub login_filter: String,
    /// Selected row among the visible users
    pub user_index: usize,
    /// Selected row among the visible repositories
    pub repo_index: usize,
    /// Transient message for the footer (e.g. the browser failed to open)
    pub status_message: Option<String>,
    pub search: SearchStore,
    pub repo_list: RepoListStore,
    pub connection: ConnectionMonitor,
    runtime: Handle,
    opener: UrlOpener,
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// Create an app over existing stores.
    pub fn new(
        search: SearchStore,
        repo_list: RepoListStore,
        connection: ConnectionMonitor,
        runtime: Handle,
    ) -> Self {
        Self {
            screen: Screen::default(),
            focus: Focus::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            query: String::new(),
            login_filter: String::new(),
            user_index: 0,
            repo_index: 0,
            status_message: None,
            search,
            repo_list,
            connection,
            runtime,
            opener: Arc::new(|url: &str| open::that(url)),
            tasks: Vec::new(),
        }
    }

    /// Wire stores, repositories and dispatcher around one API client.
    pub fn with_api(api: Arc<dyn GithubApi>, runtime: Handle) -> Self {
        let dispatcher = Dispatcher::new(runtime.clone());
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
        Self::new(search, repo_list, connection, runtime)
    }

    /// Build the production app from configuration.
    pub fn from_config(config: &AppConfig, runtime: Handle) -> color_eyre::Result<Self> {
        let client = GithubClient::from_config(config)?;
        tracing::info!(
            base_url = %client.base_url,
            authenticated = client.has_token(),
            "GitHub client ready"
        );
        Ok(Self::with_api(Arc::new(client), runtime))
    }

    /// Replace how URLs are opened.
    pub fn with_url_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick and forget finished background tasks.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.tasks.retain(|task| !task.is_finished());
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    /// Whether the current screen is waiting for data.
    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::UserList => self.search.state().is_loading,
            Screen::RepoList { .. } => self.repo_list.state().is_loading(),
        }
    }

    pub fn search_state(&self) -> SearchViewState {
        self.search.state()
    }

    pub fn repo_list_state(&self) -> RepoListViewState {
        self.repo_list.state()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.current()
    }

    /// Users shown on the search screen, after the local login filter.
    pub fn visible_users(&self) -> Vec<UserSummary> {
        self.search
            .state()
            .visible_users(&self.login_filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Repositories shown on the user screen (forks hidden).
    pub fn visible_repos(&self) -> Vec<RepositoryListItem> {
        self.repo_list
            .state()
            .visible_repos()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Selected user row, clamped to the visible users.
    pub fn selected_user_index(&self) -> usize {
        clamp_index(self.user_index, self.visible_users().len())
    }

    /// Selected repository row, clamped to the visible repositories.
    pub fn selected_repo_index(&self) -> usize {
        clamp_index(self.repo_index, self.visible_repos().len())
    }

    /// Wait until every fetch started so far has completed.
    pub async fn wait_idle(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Background fetch did not complete");
            }
        }
    }

    fn spawn<F>(&mut self, fetch: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tasks.push(self.runtime.spawn(fetch));
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}
