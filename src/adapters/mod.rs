//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockGithubApi`] - Scripted GitHub API outcomes

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockGithubApi, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
