//! Caller-supplied identity criteria for account resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing boundary criteria strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// `identified_by` named an attribute the directory cannot search on.
    #[error("unknown identifying attribute: {0}")]
    UnknownField(String),
}

/// An attribute usable to identify an account in a directory search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    Username,
    Address,
    PlatformId,
}

impl IdentityField {
    /// Parses a comma-separated attribute list, as supplied through the
    /// `identified_by` boundary parameter.
    ///
    /// Empty segments are tolerated (trailing commas, stray whitespace);
    /// unknown attribute names are an error rather than silently dropped.
    pub fn parse_list(list: &str) -> Result<Vec<IdentityField>, CriteriaError> {
        let mut fields = Vec::new();
        for part in list.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            fields.push(part.parse()?);
        }
        Ok(fields)
    }
}

impl FromStr for IdentityField {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(IdentityField::Username),
            "address" => Ok(IdentityField::Address),
            "platform_id" | "platformId" => Ok(IdentityField::PlatformId),
            other => Err(CriteriaError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentityField::Username => "username",
            IdentityField::Address => "address",
            IdentityField::PlatformId => "platform_id",
        };
        write!(f, "{name}")
    }
}

/// The identifying fields a caller supplies to locate an account.
///
/// When `object_name` is set it alone drives the directory search and the
/// `identified_by` fields are ignored for query construction. Otherwise the
/// `identified_by` attributes that have values are combined, in order, into
/// a single search phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityCriteria {
    /// Opaque object id. Takes precedence over every other identifying field.
    pub object_name: Option<String>,
    pub username: Option<String>,
    pub address: Option<String>,
    pub platform_id: Option<String>,
    /// Safe to scope the search to.
    pub safe: Option<String>,
    /// Which attributes jointly disambiguate a match, in caller order.
    pub identified_by: Vec<IdentityField>,
}

impl IdentityCriteria {
    /// Creates empty criteria with the default `identified_by` ordering
    /// (username, address, platform id).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value supplied for `field`, if any.
    #[must_use]
    pub fn field_value(&self, field: IdentityField) -> Option<&str> {
        match field {
            IdentityField::Username => self.username.as_deref(),
            IdentityField::Address => self.address.as_deref(),
            IdentityField::PlatformId => self.platform_id.as_deref(),
        }
    }
}

impl Default for IdentityCriteria {
    fn default() -> Self {
        Self {
            object_name: None,
            username: None,
            address: None,
            platform_id: None,
            safe: None,
            identified_by: vec![
                IdentityField::Username,
                IdentityField::Address,
                IdentityField::PlatformId,
            ],
        }
    }
}
