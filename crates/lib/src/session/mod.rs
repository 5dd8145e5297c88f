//! Synchronization between the remote API and the session store.
//!
//! A [`Session`] runs one remote call and, only once the server has
//! confirmed it, commits the matching [`Mutation`]. On failure the store is
//! left exactly as it was and the error is returned unchanged, so the store
//! always reflects the last confirmed server state.
//!
//! Concurrent refreshes are not ordered against each other: each commits when
//! its own response arrives, so the last response to arrive wins.

use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use crate::{
    Result,
    api::{CurrentUser, Npub, PublicKeys, RemoteApi},
    store::{Mutation, SessionStore},
};

/// Remote API paired with the store it keeps in sync.
#[derive(Clone)]
pub struct Session {
    api: Arc<dyn RemoteApi>,
    store: SessionStore,
}

impl Session {
    /// Create a session over `api` that writes into `store`.
    pub fn new(api: Arc<dyn RemoteApi>, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// The store this session writes into.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The remote API this session calls.
    pub fn api(&self) -> &Arc<dyn RemoteApi> {
        &self.api
    }

    /// Fetch the current user and record it in the store.
    ///
    /// An unauthenticated response is not an error: it records `None` and
    /// returns the payload.
    pub async fn refresh_current_user(&self) -> Result<CurrentUser> {
        let current = self.api.fetch_current_user().await.inspect_err(|e| {
            debug!(error = %e, "Refreshing current user failed, store left untouched");
        })?;

        match &current.user {
            Some(user) => debug!(account_id = %user.account_id(), "Refreshed current user"),
            None => debug!("Refreshed current user: no session"),
        }
        self.store.commit(Mutation::SetUser(current.user.clone()));

        Ok(current)
    }

    /// End the server-side session and clear the user from the store.
    pub async fn logout_current_user(&self) -> Result<()> {
        self.api.logout().await.inspect_err(|e| {
            debug!(error = %e, "Logout failed, store left untouched");
        })?;

        self.store.commit(Mutation::SetUser(None));
        info!("Logged out");

        Ok(())
    }

    /// List linked public keys. Does not touch the store.
    pub async fn public_keys(&self) -> Result<PublicKeys> {
        self.api.list_public_keys().await
    }

    /// Link a public key. Does not touch the store.
    pub async fn add_public_key(&self, npub: &Npub) -> Result<()> {
        if !npub.looks_valid() {
            debug!(%npub, "Public key does not look like an npub, sending anyway");
        }
        self.api.add_public_key(npub).await?;
        info!(%npub, "Linked public key");
        Ok(())
    }

    /// Unlink a public key. Does not touch the store.
    pub async fn delete_public_key(&self, npub: &Npub) -> Result<()> {
        self.api.delete_public_key(npub).await?;
        info!(%npub, "Unlinked public key");
        Ok(())
    }

    /// Where to send the user to log in.
    pub fn login_url(&self) -> Url {
        self.api.login_url()
    }
}
