//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport (GET only, the API is read-only)
//! - [`GithubApi`] - the three GitHub resources the app consumes

pub mod github;
pub mod http;

pub use github::GithubApi;
pub use http::{Headers, HttpClient, HttpError, Response};
