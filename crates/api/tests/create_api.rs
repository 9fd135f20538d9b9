//! Construction rules for `create_api` and its untyped counterpart.
//!
//! Untyped cases go through `create_api_from_value`, which runs before any
//! transport exists, so none of these tests touch the network.

mod support;

use forte::{create_api, create_api_from_value, ClientOptions, Credentials, ForteError, Scope};
use serde_json::{json, Value};

fn valid_scope() -> Value {
    json!({ "hostname": "shop.example.com", "trunk": "valid" })
}

fn field_of(result: forte::Result<forte::ForteApi>) -> String {
    match result {
        Err(ForteError::InvalidArgument(field)) => field,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_malformed_credentials_fail() {
    let cases = [
        (Value::Null, "credentials"),
        (json!(false), "credentials"),
        (json!({}), "credentials.privateKey"),
        (json!({ "bearerToken": 1 }), "credentials.bearerToken"),
        (json!({ "bearerToken": null }), "credentials.bearerToken"),
        (json!({ "privateKey": "valid" }), "credentials.publicKey"),
        (json!({ "publicKey": "valid" }), "credentials.privateKey"),
        (json!({ "privateKey": 1, "publicKey": "valid" }), "credentials.privateKey"),
        (json!({ "privateKey": "valid", "publicKey": {} }), "credentials.publicKey"),
    ];

    for (credentials, field) in cases {
        let result = create_api_from_value(&credentials, &valid_scope(), None);
        assert_eq!(field_of(result), field, "credentials {credentials}");
    }
}

#[test]
fn test_well_formed_credentials_succeed() {
    for credentials in [
        json!({ "bearerToken": "valid" }),
        json!({ "privateKey": "valid", "publicKey": "valid" }),
    ] {
        let api = create_api_from_value(&credentials, &valid_scope(), None)
            .unwrap_or_else(|err| panic!("{credentials} rejected: {err}"));
        assert_eq!(api.get_scope(), &Scope::new("shop.example.com", "valid"));
    }
}

#[test]
fn test_missing_scope_fails() {
    let credentials = json!({ "bearerToken": "valid" });
    assert_eq!(field_of(create_api_from_value(&credentials, &Value::Null, None)), "scope");
    assert_eq!(field_of(create_api_from_value(&credentials, &json!({}), None)), "scope.hostname");
    assert_eq!(
        field_of(create_api_from_value(&credentials, &json!({ "hostname": "h" }), None)),
        "scope.trunk"
    );
    assert_eq!(
        field_of(create_api_from_value(&credentials, &json!({ "hostname": "h", "trunk": "" }), None)),
        "scope.trunk"
    );
}

#[test]
fn test_malformed_branch_fails() {
    let credentials = json!({ "bearerToken": "valid" });
    for branch in [Value::Null, json!(""), json!(1), json!({})] {
        let scope = json!({ "hostname": "h", "trunk": "valid", "branch": branch });
        assert_eq!(
            field_of(create_api_from_value(&credentials, &scope, None)),
            "scope.branch",
            "branch {branch}"
        );
    }

    let scope = json!({ "hostname": "h", "trunk": "valid", "branch": "valid" });
    assert!(create_api_from_value(&credentials, &scope, None).is_ok());
}

#[test]
fn test_malformed_options_fail() {
    let credentials = json!({ "bearerToken": "valid" });
    let cases = [
        (json!({}), "options"),
        (Value::Null, "options"),
        (json!({ "url": 0 }), "options.url"),
        (json!({ "fingerPrintingEnabled": "x" }), "options.fingerPrintingEnabled"),
        (json!({ "url": 0, "fingerPrintingEnabled": "x" }), "options.url"),
    ];

    for (options, field) in cases {
        let result = create_api_from_value(&credentials, &valid_scope(), Some(&options));
        assert_eq!(field_of(result), field, "options {options}");
    }
}

#[test]
fn test_well_formed_options_succeed() {
    let credentials = json!({ "bearerToken": "valid" });
    assert!(create_api_from_value(&credentials, &valid_scope(), None).is_ok());

    for options in [
        json!({ "url": "v" }),
        json!({ "fingerPrintingEnabled": true }),
        json!({ "url": "v", "fingerPrintingEnabled": false }),
    ] {
        assert!(
            create_api_from_value(&credentials, &valid_scope(), Some(&options)).is_ok(),
            "options {options}"
        );
    }
}

#[test]
fn test_options_are_merged_over_defaults() {
    let (api, factory) = support::recording_client_with(
        support::trunk_scope(),
        Some(ClientOptions::new().fingerprinting(false)),
    );
    assert_eq!(api.options().url, "https://api.powerchord.io");
    assert!(!api.options().fingerprinting_enabled);
    assert!(!factory.config(0).options.fingerprinting_enabled);

    let (api, _) = support::recording_client(support::trunk_scope());
    assert!(api.options().fingerprinting_enabled);
}

#[test]
fn test_typed_construction_checks_values() {
    let empty_trunk = create_api(Credentials::bearer("valid"), Scope::new("h", ""), None);
    assert_eq!(field_of(empty_trunk), "scope.trunk");

    let empty_host = create_api(Credentials::bearer("valid"), Scope::new("", "t"), None);
    assert_eq!(field_of(empty_host), "scope.hostname");

    let empty_branch = create_api(Credentials::bearer("valid"), Scope::with_branch("h", "t", ""), None);
    assert_eq!(field_of(empty_branch), "scope.branch");

    let empty_options =
        create_api(Credentials::bearer("valid"), Scope::new("h", "t"), Some(ClientOptions::new()));
    assert_eq!(field_of(empty_options), "options");
}

#[test]
fn test_transport_receives_client_identity() {
    let (_api, factory) = support::recording_client(support::branch_scope());
    assert_eq!(factory.connection_count(), 1);

    let config = factory.config(0);
    assert_eq!(config.hostname, "shop.example.com");
    assert_eq!(*config.credentials, Credentials::bearer("valid"));
}
