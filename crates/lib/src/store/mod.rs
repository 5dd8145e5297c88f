//! Session store: the client's single source of truth about the session.
//!
//! A [`SessionStore`] is an explicitly constructed, cheaply clonable handle
//! to one [`SessionState`]. Clones share the same state, so one store is
//! created per client and handed to every component that needs it.
//!
//! State only changes through [`SessionStore::commit`], which applies one
//! [`Mutation`] atomically: readers see either the state before or after it,
//! never anything in between. Observers either take snapshots with
//! [`SessionStore::state`] or [`SessionStore::subscribe`] to be woken on
//! every change.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use crate::api::User;

mod errors;
mod mutation;
mod state;

pub use errors::StoreError;
pub use mutation::Mutation;
pub use state::{Notification, NotificationStyle, SessionState};

/// Shared handle to the session state.
#[derive(Clone, Debug)]
pub struct SessionStore {
    state: Arc<watch::Sender<SessionState>>,
}

impl SessionStore {
    /// Create a store holding an empty state (no user, no notifications).
    pub fn new() -> Self {
        Self::with_state(SessionState::default())
    }

    /// Create a store starting from `state`.
    pub fn with_state(state: SessionState) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            state: Arc::new(sender),
        }
    }

    /// Apply a mutation.
    ///
    /// Observers are only notified when the state actually changed.
    pub fn commit(&self, mutation: Mutation) {
        let name = mutation.name();
        let changed = self.state.send_if_modified(|state| mutation.apply(state));
        trace!(mutation = name, changed, "Committed mutation");
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The current user, if a session is established.
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state.borrow().notifications.clone()
    }

    /// Observe every committed change.
    pub fn subscribe(&self) -> SessionObserver {
        SessionObserver {
            receiver: self.state.subscribe(),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a [`SessionStore`] that can wait for changes.
#[derive(Debug)]
pub struct SessionObserver {
    receiver: watch::Receiver<SessionState>,
}

impl SessionObserver {
    /// Snapshot of the current state, marking it as seen.
    pub fn state(&mut self) -> SessionState {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next committed change and return the new state.
    ///
    /// Several commits between two calls are observed as one change.
    pub async fn changed(&mut self) -> Result<SessionState, StoreError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(self.state())
    }
}
