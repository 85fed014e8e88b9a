//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockGithubApi`] - GitHub API with scripted outcomes per query or login

pub mod github;
pub mod http;

pub use github::{ApiCall, MockGithubApi};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
