//! Shape checks for untyped `createApi` input.
//!
//! JSON documents, config files and other dynamic sources can express
//! states the typed API cannot: an absent field, an explicit `null`, a
//! number where a string belongs. These are told apart here, field by
//! field, before the input becomes typed values.

use forte_domain::{ClientOptions, Credentials, ForteError, Result, Scope};
use serde_json::Value;

/// Decode and check raw `createApi` arguments.
///
/// `options` of `None` means the caller supplied none; `Some(Value::Null)`
/// is an explicit null and is rejected. An options object carrying only
/// unknown keys overrides nothing and decodes to `None`.
///
/// # Errors
/// Returns [`ForteError::InvalidArgument`] naming the first malformed field,
/// e.g. `credentials.publicKey` or `scope.branch`.
pub fn decode_create_args(
    credentials: &Value,
    scope: &Value,
    options: Option<&Value>,
) -> Result<(Credentials, Scope, Option<ClientOptions>)> {
    let credentials = decode_credentials(credentials)?;
    let scope = decode_scope(scope)?;
    let options = options.map(decode_options).transpose()?.flatten();
    Ok((credentials, scope, options))
}

fn decode_credentials(value: &Value) -> Result<Credentials> {
    if is_falsy(value) {
        return Err(ForteError::invalid_argument("credentials"));
    }

    if let Some(token) = value.get("bearerToken") {
        return match token {
            Value::String(token) => Ok(Credentials::bearer(token.as_str())),
            _ => Err(ForteError::invalid_argument("credentials.bearerToken")),
        };
    }

    let private_key = require_string(value, "privateKey", "credentials.privateKey")?;
    let public_key = require_string(value, "publicKey", "credentials.publicKey")?;
    Ok(Credentials::key_pair(private_key, public_key))
}

fn decode_scope(value: &Value) -> Result<Scope> {
    if is_falsy(value) {
        return Err(ForteError::invalid_argument("scope"));
    }

    let hostname = require_identifier(value, "hostname", "scope.hostname")?;
    let trunk = require_identifier(value, "trunk", "scope.trunk")?;

    match value.get("branch") {
        None => Ok(Scope::new(hostname, trunk)),
        Some(Value::String(branch)) if !branch.is_empty() => {
            Ok(Scope::with_branch(hostname, trunk, branch.as_str()))
        }
        Some(_) => Err(ForteError::invalid_argument("scope.branch")),
    }
}

fn decode_options(value: &Value) -> Result<Option<ClientOptions>> {
    let map = match value {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ForteError::invalid_argument("options")),
    };

    let url = match map.get("url") {
        None => None,
        Some(Value::String(url)) => Some(url.clone()),
        Some(_) => return Err(ForteError::invalid_argument("options.url")),
    };

    let fingerprinting_enabled = match map.get("fingerPrintingEnabled") {
        None => None,
        Some(Value::Bool(enabled)) => Some(*enabled),
        Some(_) => return Err(ForteError::invalid_argument("options.fingerPrintingEnabled")),
    };

    let options = ClientOptions { url, fingerprinting_enabled };
    Ok((!options.is_empty()).then_some(options))
}

/// `null`, `false`, `0` and `""` count as missing.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn require_string<'v>(value: &'v Value, key: &str, field: &str) -> Result<&'v str> {
    value.get(key).and_then(Value::as_str).ok_or_else(|| ForteError::invalid_argument(field))
}

fn require_identifier<'v>(value: &'v Value, key: &str, field: &str) -> Result<&'v str> {
    require_string(value, key, field)
        .and_then(|s| if s.is_empty() { Err(ForteError::invalid_argument(field)) } else { Ok(s) })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scope() -> Value {
        json!({ "hostname": "host", "trunk": "valid" })
    }

    fn field(result: Result<(Credentials, Scope, Option<ClientOptions>)>) -> String {
        result.unwrap_err().field().unwrap_or_default().to_string()
    }

    #[test]
    fn test_malformed_credentials() {
        let cases = [
            (Value::Null, "credentials"),
            (json!(false), "credentials"),
            (json!({}), "credentials.privateKey"),
            (json!({ "bearerToken": null }), "credentials.bearerToken"),
            (json!({ "bearerToken": 0 }), "credentials.bearerToken"),
            (json!({ "privateKey": null, "publicKey": null }), "credentials.privateKey"),
            (json!({ "privateKey": 0, "publicKey": 0 }), "credentials.privateKey"),
            (json!({ "privateKey": "valid", "publicKey": 0 }), "credentials.publicKey"),
            (json!({ "privateKey": 0, "publicKey": "valid" }), "credentials.privateKey"),
            (json!({ "privateKey": "valid" }), "credentials.publicKey"),
        ];
        for (creds, expected) in cases {
            assert_eq!(field(decode_create_args(&creds, &scope(), None)), expected, "{creds}");
        }
    }

    #[test]
    fn test_well_formed_credentials() {
        let (creds, _, _) =
            decode_create_args(&json!({ "bearerToken": "valid" }), &scope(), None).unwrap();
        assert_eq!(creds, Credentials::bearer("valid"));

        let raw = json!({ "privateKey": "valid", "publicKey": "valid" });
        let (creds, scope, options) = decode_create_args(&raw, &scope(), None).unwrap();
        assert_eq!(creds, Credentials::key_pair("valid", "valid"));
        assert_eq!(scope, Scope::new("host", "valid"));
        assert!(options.is_none());
    }

    #[test]
    fn test_bearer_token_wins_over_key_pair() {
        let raw = json!({ "bearerToken": "t", "privateKey": 0 });
        let (creds, _, _) = decode_create_args(&raw, &scope(), None).unwrap();
        assert_eq!(creds.kind(), "bearer_token");
    }

    #[test]
    fn test_malformed_scope() {
        let creds = json!({ "bearerToken": "valid" });
        let cases = [
            (Value::Null, "scope"),
            (json!({}), "scope.hostname"),
            (json!({ "trunk": "valid" }), "scope.hostname"),
            (json!({ "hostname": "", "trunk": "valid" }), "scope.hostname"),
            (json!({ "hostname": "host" }), "scope.trunk"),
            (json!({ "hostname": "host", "trunk": 1 }), "scope.trunk"),
        ];
        for (raw, expected) in cases {
            assert_eq!(field(decode_create_args(&creds, &raw, None)), expected, "{raw}");
        }
    }

    #[test]
    fn test_malformed_branch() {
        let creds = json!({ "bearerToken": "valid" });
        for branch in [Value::Null, json!(""), json!(1), json!({}), json!([])] {
            let raw = json!({ "hostname": "host", "trunk": "valid", "branch": branch });
            assert_eq!(field(decode_create_args(&creds, &raw, None)), "scope.branch", "{raw}");
        }
    }

    #[test]
    fn test_branch_is_kept() {
        let creds = json!({ "bearerToken": "valid" });
        let raw = json!({ "hostname": "host", "trunk": "valid", "branch": "b1" });
        let (_, scope, _) = decode_create_args(&creds, &raw, None).unwrap();
        assert_eq!(scope.branch(), Some("b1"));
    }

    #[test]
    fn test_malformed_options() {
        let creds = json!({ "bearerToken": "valid" });
        let cases = [
            (Value::Null, "options"),
            (json!({}), "options"),
            (json!("url"), "options"),
            (json!({ "url": 0 }), "options.url"),
            (json!({ "fingerPrintingEnabled": "invalid" }), "options.fingerPrintingEnabled"),
            (json!({ "url": "valid", "fingerPrintingEnabled": "invalid" }), "options.fingerPrintingEnabled"),
            (json!({ "url": 0, "fingerPrintingEnabled": true }), "options.url"),
        ];
        for (raw, expected) in cases {
            assert_eq!(field(decode_create_args(&creds, &scope(), Some(&raw))), expected, "{raw}");
        }
    }

    #[test]
    fn test_well_formed_options() {
        let creds = json!({ "bearerToken": "valid" });
        let raw = json!({ "url": "valid", "fingerPrintingEnabled": false });
        let (_, _, options) = decode_create_args(&creds, &scope(), Some(&raw)).unwrap();
        let options = options.unwrap();
        assert_eq!(options.url.as_deref(), Some("valid"));
        assert_eq!(options.fingerprinting_enabled, Some(false));
    }

    #[test]
    fn test_unknown_option_keys_are_ignored() {
        let creds = json!({ "bearerToken": "valid" });
        let raw = json!({ "foo": 1 });
        let (_, _, options) = decode_create_args(&creds, &scope(), Some(&raw)).unwrap();
        assert!(options.is_none());

        let raw = json!({ "foo": 1, "url": "valid" });
        let (_, _, options) = decode_create_args(&creds, &scope(), Some(&raw)).unwrap();
        assert_eq!(options.unwrap().url.as_deref(), Some("valid"));
    }
}
