//! ghbrowse - search GitHub users and browse their repositories from the terminal
//!
//! Request pipeline, leaf first:
//!
//! ```text
//! GithubApi (api, traits) -> ApiResult (result) -> repositories (repository)
//!     -> stores (state) -> snapshots (view_state) -> screens (app, ui)
//! ```
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod result;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
