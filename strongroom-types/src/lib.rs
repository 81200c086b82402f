//! Core type definitions for Strongroom.
//!
//! This crate defines the vault-agnostic types shared by every consumer of
//! the account directory:
//! - The canonical [`Account`] view of a directory record
//! - Secret type and management metadata
//! - [`IdentityCriteria`] describing which account a caller means
//!
//! Everything that talks to the network (resolution, reconciliation, the
//! session handle) lives in `strongroom-directory`, not here.

mod account;
mod criteria;

pub use account::{Account, SecretManagement, SecretType};
pub use criteria::{CriteriaError, IdentityCriteria, IdentityField};
