//! Wire types of the cross-posting service API.
//!
//! Field names follow the service's JSON (`accountID`, `publicKeys`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NPUB_PREFIX;

/// Stable identifier of an account on the service.
///
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("account id can't be an empty string");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Twitter's numeric user id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TwitterId(i64);

impl TwitterId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TwitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated principal.
///
/// Immutable: a new login produces a new `User` which replaces the old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "accountID")]
    account_id: AccountId,
    #[serde(rename = "twitterID")]
    twitter_id: TwitterId,
}

impl User {
    pub fn new(account_id: AccountId, twitter_id: TwitterId) -> Self {
        Self {
            account_id,
            twitter_id,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn twitter_id(&self) -> TwitterId {
        self.twitter_id
    }
}

/// Payload of the current-user resource.
///
/// `user` is None when the request carried no valid session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user: Option<User>,
}

impl CurrentUser {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Bech32 text form of a Nostr public key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Npub(String);

impl Npub {
    pub fn new(npub: impl Into<String>) -> Self {
        Self(npub.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text carries the `npub1` prefix.
    ///
    /// Advisory only; the server decides what it accepts.
    pub fn looks_valid(&self) -> bool {
        self.0.len() > NPUB_PREFIX.len() && self.0.starts_with(NPUB_PREFIX)
    }
}

impl From<&str> for Npub {
    fn from(npub: &str) -> Self {
        Self::new(npub)
    }
}

impl From<String> for Npub {
    fn from(npub: String) -> Self {
        Self(npub)
    }
}

impl AsRef<str> for Npub {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Npub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One public key linked to the current account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub npub: Npub,
}

/// Linked public keys in the order the server returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeys {
    #[serde(rename = "publicKeys", default)]
    public_keys: Vec<PublicKey>,
}

impl PublicKeys {
    pub fn new(public_keys: Vec<PublicKey>) -> Self {
        Self { public_keys }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PublicKey> {
        self.public_keys.iter()
    }

    pub fn len(&self) -> usize {
        self.public_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.public_keys.is_empty()
    }

    /// Check whether a key with this npub is linked.
    pub fn contains(&self, npub: &str) -> bool {
        self.public_keys.iter().any(|key| key.npub.as_str() == npub)
    }
}

impl IntoIterator for PublicKeys {
    type Item = PublicKey;
    type IntoIter = std::vec::IntoIter<PublicKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.public_keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a PublicKeys {
    type Item = &'a PublicKey;
    type IntoIter = std::slice::Iter<'a, PublicKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.public_keys.iter()
    }
}

/// Body of the add-public-key request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPublicKeyRequest {
    pub npub: Npub,
}
