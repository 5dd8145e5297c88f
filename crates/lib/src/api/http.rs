//! HTTP implementation of [`RemoteApi`] using reqwest.
//!
//! The session is the `sessionID` cookie issued by the service's login
//! callback. It lives in a cookie jar owned by the client, so a logout
//! response that clears it is honoured automatically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, cookie::Jar};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use super::{AddPublicKeyRequest, ApiError, CurrentUser, Npub, PublicKeys, RemoteApi};
use crate::Result;
use crate::config::{ClientConfig, ConfigError, Endpoints};
use crate::constants::SESSION_COOKIE;

/// [`RemoteApi`] over HTTP.
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpApi {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        let jar = Arc::new(Jar::default());
        if let Some(session_id) = &config.session_id {
            jar.add_cookie_str(
                &format!("{SESSION_COOKIE}={session_id}; Path=/"),
                &config.base_url,
            );
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_provider(jar);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ConfigError::ClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            endpoints: config.endpoints(),
        })
    }

    /// Create a builder for configuring an HTTP API client.
    pub fn builder() -> HttpApiBuilder {
        HttpApiBuilder::new()
    }

    /// Resource URLs this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a request without a body.
    async fn send(&self, method: Method, url: &Url) -> std::result::Result<Response, ApiError> {
        self.execute(url, self.http.request(method, url.clone())).await
    }

    /// Send a request with a JSON body.
    async fn send_json<B>(
        &self,
        method: Method,
        url: &Url,
        body: &B,
    ) -> std::result::Result<Response, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(url, self.http.request(method, url.clone()).json(body)).await
    }

    /// Send a request to `url` and map non-success statuses to [`ApiError`].
    async fn execute(
        &self,
        url: &Url,
        request: RequestBuilder,
    ) -> std::result::Result<Response, ApiError> {
        let path = url.path().to_string();
        let request = request.build().map_err(|e| {
            let err = ApiError::transport(&path, &e);
            debug!(%path, error = %err, "Failed to build request");
            err
        })?;
        let method = request.method().clone();
        debug!(%method, %path, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            let err = ApiError::transport(&path, &e);
            debug!(%method, %path, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &path, body);
        debug!(%method, %path, %status, error = %err, "Request rejected");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> std::result::Result<T, ApiError> {
        let path = response.url().path().to_string();
        let status = response.status().as_u16();
        response.json().await.map_err(|e| ApiError::Transport {
            path,
            status: Some(status),
            reason: format!("Failed to parse response: {e}"),
        })
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn fetch_current_user(&self) -> Result<CurrentUser> {
        let response = self.send(Method::GET, self.endpoints.current_user()).await?;
        Ok(Self::decode(response).await?)
    }

    async fn logout(&self) -> Result<()> {
        self.send(Method::DELETE, self.endpoints.current_user()).await?;
        Ok(())
    }

    async fn list_public_keys(&self) -> Result<PublicKeys> {
        let response = self.send(Method::GET, self.endpoints.public_keys()).await?;
        Ok(Self::decode(response).await?)
    }

    async fn add_public_key(&self, npub: &Npub) -> Result<()> {
        let body = AddPublicKeyRequest { npub: npub.clone() };
        self.send_json(Method::POST, self.endpoints.public_keys(), &body).await?;
        Ok(())
    }

    async fn delete_public_key(&self, npub: &Npub) -> Result<()> {
        // Empty and dot segments can't name a linked key.
        let Some(url) = self.endpoints.public_key(npub.as_str()) else {
            let path = format!("{}/{npub}", self.endpoints.public_keys().path());
            debug!(%path, "Public key can't be addressed, not sending request");
            return Err(ApiError::NotFound { path }.into());
        };
        self.send(Method::DELETE, &url).await?;
        Ok(())
    }

    fn login_url(&self) -> Url {
        self.endpoints.login().clone()
    }
}

/// Builder for [`HttpApi`].
///
/// Starts from [`crate::constants::DEFAULT_BASE_URL`] when no base URL is set.
#[derive(Debug, Clone, Default)]
pub struct HttpApiBuilder {
    base_url: Option<String>,
    session_id: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root URL of the service.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Existing session id to send as the session cookie.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolve the configuration without building a client.
    pub fn config(self) -> std::result::Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(crate::constants::DEFAULT_BASE_URL);
        let mut config = ClientConfig::new(base_url)?;
        if let Some(session_id) = self.session_id {
            config = config.with_session_id(session_id);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        Ok(config)
    }

    pub fn build(self) -> Result<HttpApi> {
        let config = self.config()?;
        Ok(HttpApi::new(&config)?)
    }
}
