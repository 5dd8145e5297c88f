//! The closed set of session state transitions.

use tracing::debug;

use super::state::{Notification, SessionState};
use crate::api::User;

/// A named state transition; the only way a [`SessionState`] changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// Replace the current user wholesale. None means logged out.
    SetUser(Option<User>),
    /// Append an error notification at the tail.
    PushNotificationError(String),
    /// Remove the notification at this index. Out of range is a no-op.
    DismissNotification(usize),
}

impl Mutation {
    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetUser(_) => "setUser",
            Mutation::PushNotificationError(_) => "pushNotificationError",
            Mutation::DismissNotification(_) => "dismissNotification",
        }
    }

    /// Apply this mutation to `state`, returning whether anything changed.
    pub(crate) fn apply(self, state: &mut SessionState) -> bool {
        match self {
            Mutation::SetUser(user) => {
                state.user = user;
                true
            }
            Mutation::PushNotificationError(text) => {
                state.notifications.push(Notification::error(text));
                true
            }
            Mutation::DismissNotification(index) => {
                if index < state.notifications.len() {
                    state.notifications.remove(index);
                    true
                } else {
                    debug!(
                        index,
                        len = state.notifications.len(),
                        "Ignoring dismissal of missing notification"
                    );
                    false
                }
            }
        }
    }
}
