//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Screen};

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::UserList => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Results => self.handle_results_key(key),
                Focus::Filter => self.handle_filter_key(key),
            },
            Screen::RepoList { .. } => self.handle_repo_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_search();
                self.focus = Focus::Results;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => self.retry(),
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Down | KeyCode::Tab => self.focus = Focus::Results,
            KeyCode::Esc => self.query.clear(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let count = self.visible_users().len();
        match key.code {
            KeyCode::Up => {
                let selected = self.selected_user_index();
                if selected == 0 {
                    self.focus = Focus::Input;
                } else {
                    self.user_index = selected - 1;
                }
            }
            KeyCode::Down => self.user_index = next_index(self.selected_user_index(), count),
            KeyCode::Enter => self.open_selected_user(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('/') => self.focus = Focus::Filter,
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.login_filter.push(c);
                self.user_index = 0;
            }
            KeyCode::Backspace => {
                self.login_filter.pop();
                self.user_index = 0;
            }
            KeyCode::Enter => self.focus = Focus::Results,
            KeyCode::Esc => {
                self.login_filter.clear();
                self.user_index = 0;
                self.focus = Focus::Results;
            }
            _ => {}
        }
    }

    fn handle_repo_list_key(&mut self, key: KeyEvent) {
        let count = self.visible_repos().len();
        match key.code {
            KeyCode::Up => self.repo_index = self.selected_repo_index().saturating_sub(1),
            KeyCode::Down => self.repo_index = next_index(self.selected_repo_index(), count),
            KeyCode::Enter => self.open_selected_repo(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.navigate_back(),
            _ => {}
        }
    }
}

fn next_index(index: usize, count: usize) -> usize {
    if index + 1 < count {
        index + 1
    } else {
        index
    }
}
