use proptest::prelude::*;
use strongroom_directory::query::{build_filter_param, build_query_url, build_search_param};
use strongroom_types::{IdentityCriteria, IdentityField};

// ── search parameter ──────────────────────────────────────────────

#[test]
fn search_param_joins_identified_by_values_in_order() {
    let criteria = IdentityCriteria {
        username: Some("operator".to_string()),
        address: Some("0.0.0.0".to_string()),
        platform_id: Some("UnixSSH".to_string()),
        ..Default::default()
    };
    assert_eq!(
        build_search_param(&criteria),
        "search=operator%200.0.0.0%20UnixSSH"
    );
}

#[test]
fn search_param_follows_caller_supplied_order() {
    let criteria = IdentityCriteria {
        username: Some("operator".to_string()),
        address: Some("0.0.0.0".to_string()),
        identified_by: vec![IdentityField::Address, IdentityField::Username],
        ..Default::default()
    };
    assert_eq!(build_search_param(&criteria), "search=0.0.0.0%20operator");
}

#[test]
fn search_param_skips_fields_without_values() {
    let criteria = IdentityCriteria {
        username: Some("operator".to_string()),
        platform_id: Some("UnixSSH".to_string()),
        ..Default::default()
    };
    assert_eq!(build_search_param(&criteria), "search=operator%20UnixSSH");
}

#[test]
fn search_param_is_empty_when_nothing_identifies() {
    let criteria = IdentityCriteria::default();
    assert_eq!(build_search_param(&criteria), "");
}

#[test]
fn object_name_drives_the_search_alone() {
    let criteria = IdentityCriteria {
        object_name: Some("Operating System-UnixSSH-0.0.0.0-operator".to_string()),
        username: Some("ignored".to_string()),
        address: Some("ignored".to_string()),
        ..Default::default()
    };
    assert_eq!(
        build_search_param(&criteria),
        "search=Operating%20System-UnixSSH-0.0.0.0-operator"
    );
}

#[test]
fn search_param_percent_encodes_the_phrase() {
    let criteria = IdentityCriteria {
        username: Some("svc account".to_string()),
        identified_by: vec![IdentityField::Username],
        ..Default::default()
    };
    assert_eq!(build_search_param(&criteria), "search=svc%20account");
}

// ── filter parameter ──────────────────────────────────────────────

#[test]
fn filter_param_scopes_to_the_safe() {
    let criteria = IdentityCriteria {
        safe: Some("Linux_Passwords".to_string()),
        ..Default::default()
    };
    assert_eq!(
        build_filter_param(&criteria),
        "filter=safeName%20eq%20Linux_Passwords"
    );
}

#[test]
fn filter_param_encodes_spaces_in_safe_names() {
    let criteria = IdentityCriteria {
        safe: Some("SSH Keys".to_string()),
        ..Default::default()
    };
    assert_eq!(build_filter_param(&criteria), "filter=safeName%20eq%20SSH%20Keys");
}

#[test]
fn filter_param_is_empty_without_a_safe() {
    assert_eq!(build_filter_param(&IdentityCriteria::default()), "");
}

// ── URL joining ───────────────────────────────────────────────────

const BASE: &str = "https://vault.example.com/PasswordVault/api/Accounts";

#[test]
fn query_url_joins_search_then_filter() {
    let url = build_query_url(
        BASE,
        &["search=operator".to_string(), "filter=safeName%20eq%20X".to_string()],
    );
    assert_eq!(
        url,
        "https://vault.example.com/PasswordVault/api/Accounts?search=operator&filter=safeName%20eq%20X"
    );
}

#[test]
fn query_url_omits_empty_parameters() {
    let url = build_query_url(BASE, &[String::new(), "filter=safeName%20eq%20X".to_string()]);
    assert_eq!(
        url,
        "https://vault.example.com/PasswordVault/api/Accounts?filter=safeName%20eq%20X"
    );
}

#[test]
fn query_url_with_no_parameters_is_the_base() {
    assert_eq!(build_query_url(BASE, &[]), BASE);
    assert_eq!(build_query_url(BASE, &[String::new(), String::new()]), BASE);
}

// ── determinism properties ────────────────────────────────────────

fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z0-9 ._-]{1,24}").unwrap())
}

fn criteria_strategy() -> impl Strategy<Value = IdentityCriteria> {
    (
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
    )
        .prop_map(|(object_name, username, address, platform_id, safe)| IdentityCriteria {
            object_name,
            username,
            address,
            platform_id,
            safe,
            ..Default::default()
        })
}

proptest! {
    /// Identical criteria must always produce byte-identical parameters.
    #[test]
    fn search_param_is_deterministic(criteria in criteria_strategy()) {
        prop_assert_eq!(build_search_param(&criteria), build_search_param(&criteria));
    }

    #[test]
    fn filter_param_is_deterministic(criteria in criteria_strategy()) {
        prop_assert_eq!(build_filter_param(&criteria), build_filter_param(&criteria));
    }

    /// Encoded parameters never leak a raw space into the URL.
    #[test]
    fn parameters_are_fully_encoded(criteria in criteria_strategy()) {
        prop_assert!(!build_search_param(&criteria).contains(' '));
        prop_assert!(!build_filter_param(&criteria).contains(' '));
    }

    /// The full URL is a pure function of the criteria.
    #[test]
    fn query_url_is_deterministic(criteria in criteria_strategy()) {
        let params = [build_search_param(&criteria), build_filter_param(&criteria)];
        let again = [build_search_param(&criteria), build_filter_param(&criteria)];
        prop_assert_eq!(
            build_query_url(BASE, &params),
            build_query_url(BASE, &again)
        );
    }
}
