//! Data-transfer types for the GitHub REST API.
//!
//! Every field the client does not strictly need is optional: GitHub omits or
//! nulls fields depending on the account type and token scopes, and a missing
//! field must never turn a good response into a decode fault.

mod profile;
mod repository;
mod user;

pub use profile::Profile;
pub use repository::{License, Owner, RepositoryList, RepositoryListItem};
pub use user::{SearchUsersResult, UserSummary};

use serde::{Deserialize, Deserializer};

/// Decode a list that GitHub may send as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
