//! View-state stores.
//!
//! Each store is the single writer of one screen's snapshot. It starts a
//! repository call, publishes a loading snapshot, and folds the outcome
//! into the next snapshot. Screens read snapshots through [`state`] or a
//! `watch::Receiver` from [`subscribe`].
//!
//! Stores are cheap to clone; clones share the same snapshot. Overlapping
//! fetches are not sequenced: the last one to complete decides the state.
//!
//! [`state`]: SearchStore::state
//! [`subscribe`]: SearchStore::subscribe

mod connection;
mod repo_list;
mod search;

pub use connection::ConnectionMonitor;
pub use repo_list::RepoListStore;
pub use search::SearchStore;
