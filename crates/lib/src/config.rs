//! Client configuration.
//!
//! [`ClientConfig`] carries everything needed to talk to one service
//! deployment. [`Endpoints`] turns its base URL into the fixed resource URLs.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{CURRENT_USER_PATH, LOGIN_PATH, PUBLIC_KEYS_PATH};

/// Errors raised while building a client from configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The base URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme '{scheme}': expected http or https")]
    UnsupportedScheme { scheme: String },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

/// Configuration for a [`crate::HttpApi`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the service, e.g. `https://crossposting.example.com/`.
    pub base_url: Url,

    /// Session id issued by the login callback, if one is already known.
    pub session_id: Option<String>,

    /// Overall request timeout handed to the transport. None disables it.
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the service at `base_url`.
    ///
    /// The URL must be http(s). A trailing slash is added when missing so
    /// resource paths resolve under any prefix.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            base_url,
            session_id: None,
            timeout: None,
            user_agent: format!("crosspost/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Seed the client with an existing session id.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the transport-level request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resource URLs for this deployment.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            });
        }
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Fixed resource URLs of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
    current_user: Url,
    public_keys: Url,
    login: Url,
}

impl Endpoints {
    /// Resolve every resource against `base`, which must end with a slash.
    pub fn new(base: &Url) -> Self {
        let join = |path: &str| base.join(path).unwrap_or_else(|_| base.clone());
        Self {
            base: base.clone(),
            current_user: join(CURRENT_USER_PATH),
            public_keys: join(PUBLIC_KEYS_PATH),
            login: join(LOGIN_PATH),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn current_user(&self) -> &Url {
        &self.current_user
    }

    pub fn public_keys(&self) -> &Url {
        &self.public_keys
    }

    pub fn login(&self) -> &Url {
        &self.login
    }

    /// URL of a single linked key. `npub` becomes one percent-encoded segment.
    ///
    /// None when `npub` can't be a segment of its own: empty, `.` and `..`
    /// are dropped or resolved by URL normalization, escaped or not.
    pub fn public_key(&self, npub: &str) -> Option<Url> {
        if matches!(npub, "" | "." | "..") {
            return None;
        }
        let mut url = self.public_keys.clone();
        url.path_segments_mut().ok()?.push(npub);
        Some(url)
    }
}
