//! Pre-authenticated vault session handle.

use serde::{Deserialize, Serialize};

/// Connection details for a logged-on vault session.
///
/// Produced by an external authentication step; this crate never refreshes
/// or invalidates the token, it only sends it with each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultSession {
    /// Base URL of the vault web services, e.g. `https://vault.example.com`.
    pub api_base_url: String,
    /// Opaque session token, sent verbatim as the `Authorization` header.
    pub token: String,
    /// When false, TLS certificate validation is disabled for every call.
    pub validate_certs: bool,
}
