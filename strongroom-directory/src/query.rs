//! Directory query construction.
//!
//! Turns [`IdentityCriteria`] into the percent-encoded `search` and `filter`
//! parameters understood by the account listing endpoint, e.g.
//! `search=root%201.2.3.4&filter=safeName%20eq%20SSH_Keys`.
//!
//! These are pure functions: identical criteria always produce byte-identical
//! output, which keeps listing calls idempotent and cacheable by callers.

use strongroom_types::IdentityCriteria;

/// Builds the `search=` parameter for the account listing call.
///
/// An `object_name` is searched for on its own. Otherwise the `identified_by`
/// attributes that have values are joined, in order, into a single
/// space-separated phrase encoded as one token. Returns an empty string when
/// nothing constrains the search (list everything in scope).
#[must_use]
pub fn build_search_param(criteria: &IdentityCriteria) -> String {
    if let Some(name) = &criteria.object_name {
        return format!("search={}", urlencoding::encode(name));
    }

    let mut phrase = String::new();
    for field in &criteria.identified_by {
        if let Some(value) = criteria.field_value(*field) {
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(value);
        }
    }

    if phrase.is_empty() {
        return String::new();
    }

    format!("search={}", urlencoding::encode(&phrase))
}

/// Builds the `filter=` parameter scoping the search to a safe.
///
/// Returns an empty string when no safe was supplied.
#[must_use]
pub fn build_filter_param(criteria: &IdentityCriteria) -> String {
    match &criteria.safe {
        Some(safe) => format!("filter={}", urlencoding::encode(&format!("safeName eq {safe}"))),
        None => String::new(),
    }
}

/// Joins query parameters onto `base` with `?` and `&`, preserving order.
///
/// Empty parameters are omitted entirely, never joined as empty segments.
#[must_use]
pub fn build_query_url(base: &str, params: &[String]) -> String {
    let mut url = String::from(base);
    let mut prefix = '?';
    for param in params {
        if param.is_empty() {
            continue;
        }
        url.push(prefix);
        url.push_str(param);
        prefix = '&';
    }
    url
}
