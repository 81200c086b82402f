//! Reconciliation actions over resolved accounts.
//!
//! Each operation resolves once, then works through the matched records
//! sequentially. Deletion is fail-fast: the first failing record aborts the
//! rest of the batch and the outcome reports the committed prefix.

use crate::error::{DirectoryError, DirectoryResult};
use crate::resolver::{AccountResolver, Cardinality, ACCOUNTS_ENDPOINT, USER_AGENT};
use crate::session::VaultSession;
use serde::{Deserialize, Serialize};
use strongroom_types::{Account, IdentityCriteria, SecretType};
use tracing::{debug, info};

/// Path of the legacy per-account endpoint, still required for key-type
/// account deletion.
pub const LEGACY_ACCOUNTS_ENDPOINT: &str = "/PasswordVault/WebServices/PIMServices.svc/Accounts";

/// Desired account state for assertion-style operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    Present,
    Absent,
}

impl Default for DesiredState {
    fn default() -> Self {
        DesiredState::Present
    }
}

/// The record that aborted a delete batch, with the fault that caused it.
#[derive(Debug)]
pub struct DeleteFailure {
    pub account: Account,
    pub error: DirectoryError,
}

/// Uniform result of a reconciliation operation.
///
/// `accounts` holds the records the operation affected: the matched records
/// for reads and assertions, the deleted records for deletions. When a
/// delete batch aborts midway, `succeeded` is false, `failure` identifies
/// the record that stopped it, and `changed` stays true if any deletion
/// committed before the abort. Never mutated after construction.
#[derive(Debug)]
pub struct ReconciliationOutcome {
    pub changed: bool,
    pub succeeded: bool,
    pub accounts: Vec<Account>,
    pub failure: Option<DeleteFailure>,
}

impl ReconciliationOutcome {
    fn unchanged(accounts: Vec<Account>) -> Self {
        Self {
            changed: false,
            succeeded: true,
            accounts,
            failure: None,
        }
    }
}

/// Applies reconciliation actions against the account directory.
pub struct ReconciliationEngine {
    resolver: AccountResolver,
}

impl ReconciliationEngine {
    /// Creates an engine for the given session.
    pub fn new(session: VaultSession) -> Self {
        Self {
            resolver: AccountResolver::new(session),
        }
    }

    /// Creates an engine around an existing resolver.
    pub fn with_resolver(resolver: AccountResolver) -> Self {
        Self { resolver }
    }

    /// Returns the resolver this engine operates through.
    #[must_use]
    pub fn resolver(&self) -> &AccountResolver {
        &self.resolver
    }

    /// Returns the matched account(s) without touching the remote system.
    ///
    /// Requires exactly one match unless `multiple` is set, in which case
    /// any number of matches (including none) is returned.
    pub async fn read(
        &self,
        criteria: &IdentityCriteria,
        secret_type: Option<&SecretType>,
        multiple: bool,
    ) -> DirectoryResult<ReconciliationOutcome> {
        let cardinality = if multiple {
            Cardinality::Unbounded
        } else {
            Cardinality::ExactlyOne
        };
        let set = self.resolver.resolve(criteria, secret_type, cardinality).await?;
        Ok(ReconciliationOutcome::unchanged(set.accounts))
    }

    /// Verifies that the directory matches the desired state.
    ///
    /// `Absent` succeeds only when nothing matches. `Present` requires a
    /// single match unless `multiple` permits several; zero matches always
    /// fail it. Neither direction mutates the remote system.
    pub async fn assert_state(
        &self,
        criteria: &IdentityCriteria,
        secret_type: Option<&SecretType>,
        state: DesiredState,
        multiple: bool,
    ) -> DirectoryResult<ReconciliationOutcome> {
        let set = self
            .resolver
            .resolve(criteria, secret_type, Cardinality::Unbounded)
            .await?;

        match state {
            DesiredState::Absent => {
                if !set.accounts.is_empty() {
                    return Err(DirectoryError::UnexpectedMatch {
                        query: set.query,
                        matched: set.accounts,
                    });
                }
                Ok(ReconciliationOutcome::unchanged(Vec::new()))
            }
            DesiredState::Present => {
                if set.accounts.is_empty() {
                    return Err(DirectoryError::NoMatch { query: set.query });
                }
                if set.accounts.len() > 1 && !multiple {
                    return Err(DirectoryError::AmbiguousMatch {
                        query: set.query,
                        matched: set.accounts,
                    });
                }
                Ok(ReconciliationOutcome::unchanged(set.accounts))
            }
        }
    }

    /// Deletes the matched account(s).
    ///
    /// Zero matches is a no-op success. Each record is deleted through the
    /// endpoint its secret type requires, in resolution order; the first
    /// failure aborts the remaining batch and the outcome keeps the
    /// already-deleted prefix.
    pub async fn delete(
        &self,
        criteria: &IdentityCriteria,
        secret_type: Option<&SecretType>,
        multiple: bool,
    ) -> DirectoryResult<ReconciliationOutcome> {
        let cardinality = if multiple {
            Cardinality::Unbounded
        } else {
            Cardinality::AtMostOne
        };
        let set = self.resolver.resolve(criteria, secret_type, cardinality).await?;

        let mut deleted = Vec::new();
        for account in set.accounts {
            match self.delete_account(&account).await {
                Ok(()) => deleted.push(account),
                Err(error) => {
                    return Ok(ReconciliationOutcome {
                        changed: !deleted.is_empty(),
                        succeeded: false,
                        accounts: deleted,
                        failure: Some(DeleteFailure { account, error }),
                    });
                }
            }
        }

        Ok(ReconciliationOutcome {
            changed: !deleted.is_empty(),
            succeeded: true,
            accounts: deleted,
            failure: None,
        })
    }

    /// Deletes one account through the endpoint its secret type requires.
    ///
    /// Password secrets go through the resource-oriented endpoint and must
    /// answer 204; key secrets go through the legacy endpoint and must
    /// answer 200. Anything else is unsupported.
    async fn delete_account(&self, account: &Account) -> DirectoryResult<()> {
        let (endpoint, expected) = match account.secret_type {
            Some(SecretType::Password) => (ACCOUNTS_ENDPOINT, 204),
            Some(SecretType::Key) => (LEGACY_ACCOUNTS_ENDPOINT, 200),
            _ => {
                return Err(DirectoryError::UnsupportedSecretType {
                    id: account.id.clone(),
                    secret_type: account
                        .secret_type
                        .as_ref()
                        .map(|t| t.as_str().to_string()),
                });
            }
        };

        let session: &VaultSession = self.resolver.session();
        let url = format!("{}{}/{}", session.api_base_url, endpoint, account.id);

        debug!("Deleting account {}: {}", account.id, url);

        let response = self
            .resolver
            .client()
            .delete(&url)
            .header("Authorization", &session.token)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != expected {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Remote { status, body });
        }

        info!("Deleted account {}", account.id);
        Ok(())
    }
}
