//! Screen navigation and the actions that start fetches.

use super::{App, Focus, Screen};

impl App {
    /// Search the current query.
    ///
    /// The query is sent as typed, including when it is empty.
    pub fn submit_search(&mut self) {
        let store = self.search.clone();
        let query = self.query.clone();
        self.user_index = 0;
        self.status_message = None;
        self.spawn(async move { store.fetch(&query).await });
        self.mark_dirty();
    }

    /// Retry the last failed or finished fetch of the current screen.
    pub fn retry(&mut self) {
        match self.screen {
            Screen::UserList => {
                let store = self.search.clone();
                self.spawn(async move { store.retry().await });
            }
            Screen::RepoList { .. } => {
                let store = self.repo_list.clone();
                self.spawn(async move { store.retry().await });
            }
        }
        self.mark_dirty();
    }

    /// Open the screen of the selected user.
    pub fn open_selected_user(&mut self) {
        let Some(login) = self
            .visible_users()
            .get(self.selected_user_index())
            .and_then(|user| user.login.clone())
        else {
            return;
        };
        self.navigate_to_user(login);
    }

    /// Show the profile and repositories of `login`.
    pub fn navigate_to_user(&mut self, login: String) {
        tracing::debug!(%login, "Opening user");
        let store = self.repo_list.clone();
        let target = login.clone();
        self.spawn(async move { store.load(&target).await });

        self.screen = Screen::RepoList { login };
        self.repo_index = 0;
        self.status_message = None;
        self.mark_dirty();
    }

    /// Return from the user screen to the results.
    pub fn navigate_back(&mut self) {
        if let Screen::RepoList { .. } = self.screen {
            self.screen = Screen::UserList;
            self.focus = Focus::Results;
            self.status_message = None;
            self.mark_dirty();
        }
    }

    /// Open the selected repository in the browser.
    pub fn open_selected_repo(&mut self) {
        let Some(url) = self
            .visible_repos()
            .get(self.selected_repo_index())
            .and_then(|repo| repo.html_url.clone())
        else {
            return;
        };

        match (self.opener)(&url) {
            Ok(()) => {
                tracing::debug!(%url, "Opened repository");
                self.status_message = Some(format!("Opened {}", url));
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "Failed to open browser");
                self.status_message = Some(format!("Could not open {}: {}", url, err));
            }
        }
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
