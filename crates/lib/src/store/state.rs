//! Session state types.

use serde::{Deserialize, Serialize};

use super::Mutation;
use crate::api::User;

/// Severity tag of a [`Notification`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    Error,
}

impl NotificationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStyle::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ephemeral message for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub style: NotificationStyle,
    pub text: String,
}

impl Notification {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Error,
            text: text.into(),
        }
    }
}

/// Root state object owned by a [`super::SessionStore`].
///
/// `user` is None until a fetch confirms a session and goes back to None on
/// logout. Notifications are kept in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub notifications: Vec<Notification>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply a mutation in place.
    ///
    /// Returns false when the mutation left the state unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        mutation.apply(self)
    }

    /// Build a state by replaying mutations onto an empty one.
    pub fn replay(mutations: impl IntoIterator<Item = Mutation>) -> Self {
        let mut state = Self::new();
        for mutation in mutations {
            state.apply(mutation);
        }
        state
    }
}
