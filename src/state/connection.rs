//! Shared connectivity indicator fed by the stores.

use std::sync::Arc;
use tokio::sync::watch;

use crate::result::ApiResult;
use crate::view_state::ConnectionState;

/// Tracks [`ConnectionState`] across every store it is attached to.
#[derive(Debug, Clone)]
pub struct ConnectionMonitor {
    state: Arc<watch::Sender<ConnectionState>>,
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ConnectionState::default());
        Self {
            state: Arc::new(state),
        }
    }

    /// Update from a completed call. Notifies only on change.
    pub fn record<T>(&self, result: &ApiResult<T>) {
        let next = ConnectionState::after(result);
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            let previous = *current;
            tracing::info!(?previous, ?next, "Connection state changed");
            *current = next;
            true
        });
    }

    pub fn current(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}
