//! Field renaming between remote directory records and canonical names.
//!
//! The directory returns records under its own field names (`userName`,
//! `safeName`, ...). A [`KeyMap`] moves those fields to the canonical names
//! the rest of the system uses, leaving everything else untouched.

use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// The canonical directory-to-core rename table for account records.
const ACCOUNT_KEY_MAP: &[(&str, &str)] = &[
    ("categoryModificationTime", "modifiedTime"),
    ("createdTime", "createdTime"),
    ("secretType", "secretType"),
    ("platformAccountProperties", "platformAccountProperties"),
    ("platformId", "platformId"),
    ("safeName", "safe"),
    ("secretManagement", "secretManagement"),
    ("userName", "username"),
];

/// Error constructing a [`KeyMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyMapError {
    /// Two source fields would be renamed to the same target.
    #[error("duplicate rename target: {0}")]
    DuplicateTarget(String),
}

/// A statically declared field rename table.
///
/// Injective by construction: a table naming the same target twice is
/// rejected when the map is built.
#[derive(Debug, Clone)]
pub struct KeyMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl KeyMap {
    /// Creates a key map from `(source, target)` pairs.
    pub fn new(entries: &[(&'static str, &'static str)]) -> Result<Self, KeyMapError> {
        let mut targets = HashSet::new();
        for (_, target) in entries {
            if !targets.insert(*target) {
                return Err(KeyMapError::DuplicateTarget((*target).to_string()));
            }
        }
        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    /// The canonical rename table for account records.
    #[must_use]
    pub fn account() -> Self {
        Self::new(ACCOUNT_KEY_MAP).expect("canonical account key map must be injective")
    }

    /// Returns the canonical name for a remote field, if the table names it.
    #[must_use]
    pub fn target_for(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| *source == key)
            .map(|(_, target)| *target)
    }

    /// Renames the fields of every record according to the table.
    ///
    /// Pure and non-destructive: input records are left untouched and every
    /// output record is an independent copy. Fields absent from the table
    /// pass through unchanged; record order is preserved.
    #[must_use]
    pub fn rename(&self, records: &[Map<String, Value>]) -> Vec<Map<String, Value>> {
        records
            .iter()
            .map(|record| {
                let mut out = Map::new();
                for (key, value) in record {
                    match self.target_for(key) {
                        Some(target) => out.insert(target.to_string(), value.clone()),
                        None => out.insert(key.clone(), value.clone()),
                    };
                }
                out
            })
            .collect()
    }
}
