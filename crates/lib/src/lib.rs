//!
//! Crosspost: client library for the Nos cross-posting service.
//!
//! The service links a Twitter account with one or more Nostr public keys and
//! cross-posts notes published under those keys. This crate keeps a client's
//! view of that account consistent with the server.
//!
//! ## Core Concepts
//!
//! * **Remote API (`api::RemoteApi`)**: A stateless, typed facade over the service's HTTP
//!   resources. [`api::HttpApi`] is the `reqwest` implementation.
//! * **Session Store (`store::SessionStore`)**: The single owned, observable container for the
//!   current user and pending notifications. It only changes through [`store::Mutation`]s.
//! * **Session (`session::Session`)**: Synchronization operations that run a remote call and
//!   apply the matching mutation once the server has confirmed it.
//! * **Configuration (`config::ClientConfig`)**: Base URL, session cookie and transport options.

pub mod api;
pub mod config;
pub mod constants;
pub mod session;
pub mod store;

pub use api::{HttpApi, RemoteApi};
pub use config::ClientConfig;
pub use session::Session;
pub use store::{Mutation, SessionState, SessionStore};

/// Result type used throughout the Crosspost library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Crosspost library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured remote API errors from the api module
    #[error(transparent)]
    Api(api::ApiError),

    /// Structured session store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Api(_) => "api",
            Error::Store(_) => "store",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api(api_err) => api_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Api(api_err) => api_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Api(api_err) => api_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is a network or server failure.
    pub fn is_transport_error(&self) -> bool {
        match self {
            Error::Api(api_err) => api_err.is_transport_error(),
            _ => false,
        }
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Get the remote API error, if this is one.
    pub fn as_api_error(&self) -> Option<&api::ApiError> {
        match self {
            Error::Api(api_err) => Some(api_err),
            _ => None,
        }
    }
}
