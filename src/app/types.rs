//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which part of the search screen receives keys

/// Represents which screen is currently active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Search input and user list
    #[default]
    UserList,
    /// Profile and repositories of one user
    RepoList { login: String },
}

/// Represents which part of the search screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search query
    #[default]
    Input,
    /// Arrow keys move through the results
    Results,
    /// Typing edits the local login filter
    Filter,
}
