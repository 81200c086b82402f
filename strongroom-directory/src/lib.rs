//! Vault account directory client and reconciliation engine.
//!
//! Resolves caller-supplied identity criteria against a remote vault's
//! account directory and applies idempotent reconciliation actions (read,
//! assert presence or absence, delete) to the matched records.
//!
//! # Components
//!
//! - **query**: turns criteria into the directory's search/filter parameters
//! - **keymap**: renames remote field names to their canonical counterparts
//! - **filter**: client-side predicates the remote query syntax lacks
//! - **resolver**: one listing call plus the caller's cardinality policy
//! - **reconcile**: per-record actions with fail-fast batch semantics
//!
//! Each operation issues exactly one listing call, then works through the
//! matched records sequentially. There is no retry, cache, or parallel
//! fan-out; the session handle is read-only here.
//!
//! # Example
//!
//! ```
//! use strongroom_directory::{ReconciliationEngine, VaultSession};
//!
//! let session = VaultSession {
//!     api_base_url: "https://vault.example.com".to_string(),
//!     token: "session-token".to_string(),
//!     validate_certs: true,
//! };
//!
//! let engine = ReconciliationEngine::new(session);
//! ```

mod error;
pub mod filter;
pub mod keymap;
pub mod query;
mod reconcile;
mod resolver;
mod session;

pub use error::{DirectoryError, DirectoryResult};
pub use keymap::{KeyMap, KeyMapError};
pub use reconcile::{
    DeleteFailure, DesiredState, ReconciliationEngine, ReconciliationOutcome,
    LEGACY_ACCOUNTS_ENDPOINT,
};
pub use resolver::{AccountResolver, Cardinality, ResolvedSet, ACCOUNTS_ENDPOINT, USER_AGENT};
pub use session::VaultSession;
