//! Canonical account types.
//!
//! The directory returns records under its own field names; they are renamed
//! to the canonical names below before being deserialized into [`Account`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether an account's managed secret is a password or a cryptographic key.
///
/// The secret type decides which deletion endpoint applies to the account.
/// Wire values other than `password` and `key` are preserved in
/// [`SecretType::Other`] so that resolution can still return the record;
/// only a mutation targeting it is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    Password,
    Key,
    #[serde(untagged)]
    Other(String),
}

impl SecretType {
    /// Returns the wire representation of this secret type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SecretType::Password => "password",
            SecretType::Key => "key",
            SecretType::Other(other) => other,
        }
    }
}

impl Default for SecretType {
    fn default() -> Self {
        SecretType::Password
    }
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters associated with the management of an account's credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretManagement {
    /// Whether the vault manages the credential automatically.
    pub automatic_management_enabled: bool,
    /// Timestamp of the last credential modification (epoch seconds).
    pub last_modified_time: Option<i64>,
    /// Reason the account was taken out of automatic management.
    pub manual_management_reason: Option<String>,
}

/// Canonical view of a directory account record.
///
/// Transient by design: built per query from a renamed remote record and
/// discarded once the calling operation completes. Only `id` is guaranteed
/// by the directory; every other field depends on the account's platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Internal object id, unique within the vault.
    pub id: String,
    /// External object name.
    #[serde(default)]
    pub name: Option<String>,
    /// Safe holding the account.
    #[serde(default)]
    pub safe: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Id of the platform whose policy manages this account.
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub secret_type: Option<SecretType>,
    /// Account creation timestamp (epoch seconds).
    #[serde(default)]
    pub created_time: Option<i64>,
    /// Last category modification timestamp (epoch seconds).
    #[serde(default)]
    pub modified_time: Option<i64>,
    /// Platform-defined key-value properties.
    #[serde(default)]
    pub platform_account_properties: HashMap<String, String>,
    #[serde(default)]
    pub secret_management: Option<SecretManagement>,
}
