//! Remote access to the cross-posting service.
//!
//! [`RemoteApi`] is the seam between the synchronization layer and the
//! network. Each operation maps to exactly one request against a fixed
//! resource; nothing is cached and nothing is retried.

use async_trait::async_trait;
use url::Url;

use crate::Result;

pub mod errors;
pub mod http;
pub mod types;

pub use errors::ApiError;
pub use http::{HttpApi, HttpApiBuilder};
pub use types::{
    AccountId, AddPublicKeyRequest, CurrentUser, Npub, PublicKey, PublicKeys, TwitterId, User,
};

/// Typed operations on the service's HTTP resources.
///
/// Implementations hold no resource state. Errors are returned as
/// [`crate::Error::Api`] and are never recovered from here.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetch the current user.
    ///
    /// Resolves with `user = None` when the server reports no session.
    async fn fetch_current_user(&self) -> Result<CurrentUser>;

    /// End the server-side session. Safe to repeat once logged out.
    async fn logout(&self) -> Result<()>;

    /// List the public keys linked to the current account.
    async fn list_public_keys(&self) -> Result<PublicKeys>;

    /// Link a public key to the current account.
    async fn add_public_key(&self, npub: &Npub) -> Result<()>;

    /// Unlink a public key from the current account.
    async fn delete_public_key(&self, npub: &Npub) -> Result<()>;

    /// URL the user navigates to in order to start the login flow.
    fn login_url(&self) -> Url;
}
