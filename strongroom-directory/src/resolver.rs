//! Account resolution against the remote directory.
//!
//! One GET per resolve call: build the query, fetch the listing, rename
//! fields to canonical names, apply the client-side secret type filter,
//! then enforce the caller's cardinality policy.

use crate::error::{DirectoryError, DirectoryResult};
use crate::filter;
use crate::keymap::KeyMap;
use crate::query;
use crate::session::VaultSession;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use strongroom_types::{Account, IdentityCriteria, SecretType};
use tracing::debug;

/// Path of the account listing endpoint.
pub const ACCOUNTS_ENDPOINT: &str = "/PasswordVault/api/Accounts";

/// Fixed client identification sent with every request.
pub const USER_AGENT: &str = "Strongroom/0.4 (strongroom-directory)";

/// How many matches an operation tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Zero matches fail with `NoMatch`, several with `AmbiguousMatch`.
    ExactlyOne,
    /// Zero matches succeed with an empty set; several still fail.
    AtMostOne,
    /// Any number of matches, including none.
    Unbounded,
}

/// Accounts matching a set of criteria, with the policy that produced them.
#[derive(Debug, Clone)]
pub struct ResolvedSet {
    /// Matched accounts, in the order the directory returned them.
    pub accounts: Vec<Account>,
    /// Cardinality policy the set was resolved under.
    pub cardinality: Cardinality,
    /// Listing URL the set was resolved from, kept for diagnostics.
    pub query: String,
}

/// Listing response body. The directory omits `value` entirely when nothing
/// matches, so its absence means an empty listing, not an error.
#[derive(Debug, Deserialize)]
struct AccountListing {
    #[serde(default)]
    value: Vec<Map<String, Value>>,
}

/// Resolves identity criteria to concrete directory accounts.
pub struct AccountResolver {
    session: VaultSession,
    client: Client,
    key_map: KeyMap,
}

impl AccountResolver {
    /// Creates a resolver for the given session.
    pub fn new(session: VaultSession) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .danger_accept_invalid_certs(!session.validate_certs)
            .build()
            .expect("failed to create HTTP client");

        Self {
            session,
            client,
            key_map: KeyMap::account(),
        }
    }

    /// Returns the session this resolver operates on.
    #[must_use]
    pub fn session(&self) -> &VaultSession {
        &self.session
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Resolves `criteria` to the accounts matching them.
    ///
    /// Issues exactly one listing call. `secret_type` narrows the matches
    /// client-side; `cardinality` decides whether zero or several matches
    /// are acceptable. The returned accounts keep the directory's order.
    pub async fn resolve(
        &self,
        criteria: &IdentityCriteria,
        secret_type: Option<&SecretType>,
        cardinality: Cardinality,
    ) -> DirectoryResult<ResolvedSet> {
        let url = query::build_query_url(
            &format!("{}{}", self.session.api_base_url, ACCOUNTS_ENDPOINT),
            &[
                query::build_search_param(criteria),
                query::build_filter_param(criteria),
            ],
        );

        debug!("Listing accounts: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.session.token)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let listing: AccountListing = serde_json::from_str(&body)?;

        let mut records = self.key_map.rename(&listing.value);
        if let Some(secret_type) = secret_type {
            records = filter::filter_by_equality(
                records,
                "secretType",
                &Value::String(secret_type.as_str().to_string()),
            );
        }

        let mut accounts = Vec::with_capacity(records.len());
        for record in records {
            accounts.push(serde_json::from_value(Value::Object(record))?);
        }

        apply_cardinality(cardinality, accounts, url)
    }
}

fn apply_cardinality(
    cardinality: Cardinality,
    accounts: Vec<Account>,
    query: String,
) -> DirectoryResult<ResolvedSet> {
    match cardinality {
        Cardinality::ExactlyOne if accounts.is_empty() => Err(DirectoryError::NoMatch { query }),
        Cardinality::ExactlyOne | Cardinality::AtMostOne if accounts.len() > 1 => {
            Err(DirectoryError::AmbiguousMatch {
                query,
                matched: accounts,
            })
        }
        _ => Ok(ResolvedSet {
            accounts,
            cardinality,
            query,
        }),
    }
}
