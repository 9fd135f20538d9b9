//! Facade operations against an in-memory transport.

mod support;

use std::sync::Arc;

use forte::{ApiResponse, AuthOutcome, Filter, ForteError, Scope};
use parking_lot::Mutex;
use serde_json::{json, Value};
use support::{branch_scope, recording_client, rejected, trunk_scope, Recorded};

fn get(path: &str) -> Recorded {
    Recorded::Get { path: path.to_string(), query: Vec::new() }
}

fn invalid(field: &str) -> ForteError {
    ForteError::InvalidArgument(field.to_string())
}

#[test]
fn test_with_branch_derives_new_scope() {
    let (api, factory) = recording_client(branch_scope());

    let derived = api.with_branch("branchid").unwrap();

    assert_eq!(derived.get_scope(), &Scope::with_branch("shop.example.com", "valid", "branchid"));
    assert_eq!(api.get_scope(), &Scope::with_branch("shop.example.com", "valid", "valid"));
    assert_eq!(factory.connection_count(), 2);
    assert!(Arc::ptr_eq(&factory.config(0).credentials, &factory.config(1).credentials));
    assert!(Arc::ptr_eq(&factory.config(0).options, &factory.config(1).options));
}

#[test]
fn test_with_branch_from_trunk_scope() {
    let (api, _) = recording_client(trunk_scope());
    let derived = api.with_branch("b").unwrap();
    assert_eq!(derived.get_scope().branch(), Some("b"));
    assert_eq!(api.get_scope().branch(), None);
}

#[test]
fn test_with_branch_rejects_empty_id() {
    let (api, factory) = recording_client(branch_scope());
    assert_eq!(api.with_branch("").unwrap_err(), invalid("scope.branch"));
    assert_eq!(factory.connection_count(), 1);
}

#[tokio::test]
async fn test_log_posts_entry() {
    let (api, factory) = recording_client(trunk_scope());

    api.log("info", "hello", None).unwrap().await.unwrap();
    api.log("fatal", "boom", Some(&json!({ "code": 7 }))).unwrap().await.unwrap();

    assert_eq!(
        factory.requests(0),
        vec![
            Recorded::Post {
                path: "/developer/log".to_string(),
                body: json!({ "level": "info", "message": "hello" }),
            },
            Recorded::Post {
                path: "/developer/log".to_string(),
                body: json!({ "level": "fatal", "message": "boom", "meta": { "code": 7 } }),
            },
        ]
    );
}

#[tokio::test]
async fn test_log_rejects_bad_arguments() {
    let (api, factory) = recording_client(trunk_scope());

    let err = rejected(api.log("verbose", "hello", None));
    assert_eq!(
        err,
        invalid("Log level \"verbose\" is invalid. Use one of: trace, debug, info, warn, error, fatal")
    );

    for message in ["", "   "] {
        let err = rejected(api.log("info", message, None));
        assert!(err.is_invalid_argument(), "message {message:?}");
    }

    for meta in [Value::Null, json!(1), json!("x"), json!(true)] {
        let err = rejected(api.log("info", "hello", Some(&meta)));
        assert!(err.is_invalid_argument(), "meta {meta}");
    }
    assert_eq!(rejected(api.log("info", "hello", Some(&json!("x")))), invalid("Meta \"x\" is invalid."));

    assert_eq!(factory.total_requests(), 0);
}

#[tokio::test]
async fn test_log_accepts_array_meta() {
    let (api, factory) = recording_client(trunk_scope());

    api.log("debug", "batch", Some(&json!([1, 2]))).unwrap().await.unwrap();

    assert_eq!(
        factory.requests(0),
        vec![Recorded::Post {
            path: "/developer/log".to_string(),
            body: json!({ "level": "debug", "message": "batch", "meta": [1, 2] }),
        }]
    );
}

#[test]
fn test_arguments_are_checked_before_anything_is_awaited() {
    let (api, factory) = recording_client(trunk_scope());

    assert!(api.log("info", "", None).is_err());
    assert!(api.organizations().get_one("").is_err());

    // An accepted request does nothing until it is awaited.
    let pending = api.organizations().get_one("id1");
    assert!(pending.is_ok());
    drop(pending);
    assert_eq!(factory.total_requests(), 0);
}

#[tokio::test]
async fn test_organizations_get_many() {
    let (api, factory) = recording_client(trunk_scope());

    let err = rejected(api.organizations().get_many(&Filter::new()));
    assert_eq!(err, invalid("filter"));
    assert_eq!(factory.total_requests(), 0);

    let response = api.organizations().get_many(&Filter::new().with("x", 1)).unwrap().await.unwrap();
    assert_eq!(response, ApiResponse::new(200, Value::Null));
    assert_eq!(
        factory.requests(0),
        vec![Recorded::Get {
            path: "/organizations/".to_string(),
            query: vec![("x".to_string(), "1".to_string())],
        }]
    );
}

#[tokio::test]
async fn test_organizations_get_one() {
    let (api, factory) = recording_client(trunk_scope());

    assert_eq!(rejected(api.organizations().get_one("")), invalid("id"));
    assert_eq!(factory.total_requests(), 0);

    api.organizations().get_one("id1").unwrap().await.unwrap();
    assert_eq!(factory.requests(0), vec![get("/organizations/id1")]);
}

#[tokio::test]
async fn test_branch_resources_build_exact_paths() {
    let (api, factory) = recording_client(Scope::with_branch("shop.example.com", "t", "b"));

    api.locations().get_one("loc1").unwrap().await.unwrap();
    api.locations().get_many(&Filter::new().with("city", "Oslo")).unwrap().await.unwrap();
    api.content().get_one("video", "v9").unwrap().await.unwrap();
    api.content().get_many("video", &Filter::new().with("tag", "intro")).unwrap().await.unwrap();
    api.composite().query(&json!({ "products": { "limit": 3 } })).unwrap().await.unwrap();

    assert_eq!(
        factory.requests(0),
        vec![
            get("/forte/organizations/t/b/locations/loc1"),
            Recorded::Get {
                path: "/forte/organizations/t/b/locations/".to_string(),
                query: vec![("city".to_string(), "Oslo".to_string())],
            },
            get("/forte/t/b/content/video/v9"),
            Recorded::Get {
                path: "/forte/t/b/content/video/".to_string(),
                query: vec![("tag".to_string(), "intro".to_string())],
            },
            Recorded::Post {
                path: "/forte/composite/t/b/".to_string(),
                body: json!({ "products": { "limit": 3 } }),
            },
        ]
    );
}

#[tokio::test]
async fn test_branch_resources_require_branch() {
    let (api, factory) = recording_client(trunk_scope());

    assert_eq!(rejected(api.locations().get_one("loc1")), invalid("scope.branch"));
    assert_eq!(
        rejected(api.content().get_many("video", &Filter::new().with("a", 1))),
        invalid("scope.branch")
    );
    assert_eq!(rejected(api.composite().query(&json!({ "a": 1 }))), invalid("scope.branch"));
    assert_eq!(factory.total_requests(), 0);

    let branch = api.with_branch("b").unwrap();
    branch.locations().get_one("loc1").unwrap().await.unwrap();
    assert_eq!(factory.requests(1), vec![get("/forte/organizations/valid/b/locations/loc1")]);
}

#[tokio::test]
async fn test_branch_resource_argument_rules() {
    let (api, factory) = recording_client(branch_scope());

    assert_eq!(rejected(api.locations().get_one(" ")), invalid("id"));
    assert_eq!(rejected(api.locations().get_many(&Filter::new())), invalid("filter"));
    assert_eq!(rejected(api.content().get_one("", "v1")), invalid("type"));
    assert_eq!(rejected(api.content().get_one("video", "")), invalid("id"));
    assert_eq!(
        rejected(api.content().get_many("video", &Filter::new())),
        invalid("filter")
    );
    assert_eq!(rejected(api.composite().query(&json!({}))), invalid("query"));
    assert_eq!(rejected(api.composite().query(&json!([1]))), invalid("query"));
    assert_eq!(factory.total_requests(), 0);
}

#[tokio::test]
async fn test_experience_resource() {
    let (api, factory) = recording_client(trunk_scope());

    assert_eq!(rejected(api.experience().bootstrap("")), invalid("id"));
    api.experience().session().await.unwrap();
    api.experience().bootstrap("exp-1").unwrap().await.unwrap();

    assert_eq!(factory.requests(0), vec![get("/session/check"), get("/forte/bootstrap/exp-1")]);
}

#[test]
fn test_on_rejects_unknown_event() {
    let (api, _) = recording_client(trunk_scope());
    let err = api.on("login", |_: &AuthOutcome| {}).unwrap_err();
    assert_eq!(err, invalid("\"login\" is not a supported event."));
}

#[test]
fn test_auth_fan_out_in_registration_order() {
    let (api, factory) = recording_client(trunk_scope());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&seen);
    let first_id = api
        .on("auth", move |outcome: &AuthOutcome| first.lock().push(("first", outcome.is_ok())))
        .unwrap();
    let second = Arc::clone(&seen);
    api.on_auth(move |outcome: &AuthOutcome| second.lock().push(("second", outcome.is_ok())));

    factory.signal_auth(0, &Ok(ApiResponse::new(200, json!({ "token": "t" }))));
    factory.signal_auth(0, &Err(ForteError::Auth("expired".to_string())));

    assert_eq!(
        *seen.lock(),
        vec![("first", true), ("second", true), ("first", false), ("second", false)]
    );

    assert!(api.unsubscribe(first_id));
    factory.signal_auth(0, &Ok(ApiResponse::new(200, Value::Null)));
    assert_eq!(seen.lock().last(), Some(&("second", true)));
    assert_eq!(seen.lock().len(), 5);
}

#[test]
fn test_derived_client_has_own_registry() {
    let (api, factory) = recording_client(branch_scope());
    let derived = api.with_branch("other").unwrap();

    let parent_hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&parent_hits);
    api.on_auth(move |_: &AuthOutcome| *counter.lock() += 1);

    let derived_hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&derived_hits);
    derived.on_auth(move |_: &AuthOutcome| *counter.lock() += 1);

    factory.signal_auth(1, &Err(ForteError::Auth("denied".to_string())));

    assert_eq!(*parent_hits.lock(), 0);
    assert_eq!(*derived_hits.lock(), 1);
}
