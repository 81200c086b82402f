//! Error types for directory operations.

use strongroom_types::Account;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur while resolving or reconciling accounts.
///
/// Match faults carry the listing URL and the matched records so the caller
/// can tell which accounts caused the failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The vault API rejected the request.
    #[error("vault rejected request with HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed response body or record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Resolution found no account where at least one was required.
    #[error("no account matched {query}")]
    NoMatch { query: String },

    /// Resolution found several accounts where exactly one was required.
    #[error("{} accounts matched {} where exactly one was required", .matched.len(), .query)]
    AmbiguousMatch { query: String, matched: Vec<Account> },

    /// An absence assertion found matching accounts.
    #[error("expected no account to match {} but found {}", .query, .matched.len())]
    UnexpectedMatch { query: String, matched: Vec<Account> },

    /// A mutation targeted an account whose secret type has no handler.
    #[error("account {} has unsupported secret type {}", .id, .secret_type.as_deref().unwrap_or("none"))]
    UnsupportedSecretType {
        id: String,
        secret_type: Option<String>,
    },
}

impl DirectoryError {
    /// Returns the HTTP status of a remote or transport fault, if any.
    #[must_use]
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            DirectoryError::Remote { status, .. } => Some(*status),
            DirectoryError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
