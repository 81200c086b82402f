//! Client-side record predicates.
//!
//! The listing endpoint cannot filter on every field (notably `secretType`),
//! so those predicates run here, on the fetched records.

use serde_json::{Map, Value};

/// Returns the records whose `field` equals `value`, preserving order.
///
/// Records missing `field` are excluded, never an error.
#[must_use]
pub fn filter_by_equality(
    records: Vec<Map<String, Value>>,
    field: &str,
    value: &Value,
) -> Vec<Map<String, Value>> {
    records
        .into_iter()
        .filter(|record| record.get(field) == Some(value))
        .collect()
}
