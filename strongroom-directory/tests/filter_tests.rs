use serde_json::{json, Map, Value};
use strongroom_directory::filter::filter_by_equality;

fn records(values: &[Value]) -> Vec<Map<String, Value>> {
    values
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

#[test]
fn keeps_only_matching_records() {
    let input = records(&[
        json!({"id": "1", "secretType": "password"}),
        json!({"id": "2", "secretType": "key"}),
        json!({"id": "3", "secretType": "password"}),
    ]);
    let out = filter_by_equality(input, "secretType", &json!("password"));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].get("id"), Some(&json!("1")));
    assert_eq!(out[1].get("id"), Some(&json!("3")));
}

#[test]
fn records_missing_the_field_are_excluded() {
    let input = records(&[
        json!({"id": "1", "secretType": "password"}),
        json!({"id": "2"}),
    ]);
    let out = filter_by_equality(input, "secretType", &json!("password"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("id"), Some(&json!("1")));
}

#[test]
fn value_type_must_match() {
    let input = records(&[json!({"id": "1", "port": "22"}), json!({"id": "2", "port": 22})]);
    let out = filter_by_equality(input, "port", &json!("22"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("id"), Some(&json!("1")));
}

#[test]
fn no_match_yields_empty() {
    let input = records(&[json!({"id": "1", "secretType": "key"})]);
    let out = filter_by_equality(input, "secretType", &json!("password"));
    assert!(out.is_empty());
}

#[test]
fn empty_input_yields_empty() {
    let out = filter_by_equality(Vec::new(), "secretType", &json!("password"));
    assert!(out.is_empty());
}

#[test]
fn order_is_stable() {
    let input = records(&[
        json!({"id": "3", "secretType": "password"}),
        json!({"id": "1", "secretType": "password"}),
        json!({"id": "2", "secretType": "password"}),
    ]);
    let out = filter_by_equality(input, "secretType", &json!("password"));
    let ids: Vec<_> = out.iter().map(|r| r.get("id").unwrap().clone()).collect();
    assert_eq!(ids, vec![json!("3"), json!("1"), json!("2")]);
}
