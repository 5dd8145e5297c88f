//! Constants used throughout the Crosspost library.
//!
//! Central definitions for the service's resource paths and cookie names.
//! Paths are relative so they resolve under any base URL prefix.

/// Current-user resource. GET fetches it, DELETE ends the session.
pub const CURRENT_USER_PATH: &str = "api/current-user";

/// Public keys linked to the current user.
pub const PUBLIC_KEYS_PATH: &str = "api/current-user/public-keys";

/// Server-driven identity provider login flow.
pub const LOGIN_PATH: &str = "login";

/// Name of the cookie carrying the server-side session id.
pub const SESSION_COOKIE: &str = "sessionID";

/// Human-readable prefix of a bech32 encoded Nostr public key.
pub const NPUB_PREFIX: &str = "npub1";

/// Default base URL of a locally running service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8008";
