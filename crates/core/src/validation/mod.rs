//! Argument validation for every public SDK operation.
//!
//! Each operation is described by a [`MethodCall`] variant that borrows its
//! arguments, and [`validate`] is the single dispatch point. A call either
//! passes or fails with [`ForteError::InvalidArgument`] naming the offending
//! field; nothing here touches the network.

mod raw;
mod validators;

use forte_domain::{ClientOptions, Credentials, EventName, Filter, ForteError, LogLevel, Result, Scope};
use serde_json::Value;
use tracing::debug;

use crate::paths::BranchScope;

pub use raw::decode_create_args;
pub use validators::{FieldValidator, NonEmptyObjectValidator, StringValidator, IDENTIFIER, NON_BLANK};

/// Arguments of one public operation, keyed by the operation they belong to.
#[derive(Debug, Clone, Copy)]
pub enum MethodCall<'a> {
    CreateApi { credentials: &'a Credentials, scope: &'a Scope, options: Option<&'a ClientOptions> },
    WithBranch { id: &'a str },
    On { name: &'a str },
    Log { level: &'a str, message: &'a str, meta: Option<&'a Value> },
    OrganizationsGetMany { filter: &'a Filter },
    OrganizationsGetOne { id: &'a str },
    LocationsGetMany { scope: &'a Scope, filter: &'a Filter },
    LocationsGetOne { scope: &'a Scope, id: &'a str },
    ContentGetMany { scope: &'a Scope, content_type: &'a str, filter: &'a Filter },
    ContentGetOne { scope: &'a Scope, content_type: &'a str, id: &'a str },
    CompositeQuery { scope: &'a Scope, query: &'a Value },
    ExperienceBootstrap { id: &'a str },
}

impl MethodCall<'_> {
    /// Public name of the operation, as used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateApi { .. } => "createApi",
            Self::WithBranch { .. } => "withBranch",
            Self::On { .. } => "on",
            Self::Log { .. } => "log",
            Self::OrganizationsGetMany { .. } => "organizations.getMany",
            Self::OrganizationsGetOne { .. } => "organizations.getOne",
            Self::LocationsGetMany { .. } => "locations.getMany",
            Self::LocationsGetOne { .. } => "locations.getOne",
            Self::ContentGetMany { .. } => "content.getMany",
            Self::ContentGetOne { .. } => "content.getOne",
            Self::CompositeQuery { .. } => "composite.query",
            Self::ExperienceBootstrap { .. } => "experience.bootstrap",
        }
    }
}

/// Validate the arguments of `call`.
///
/// # Errors
/// Returns [`ForteError::InvalidArgument`] on the first rule violated.
pub fn validate(call: &MethodCall<'_>) -> Result<()> {
    let result = match *call {
        MethodCall::CreateApi { scope, options, .. } => {
            // Typed credentials are well-formed by construction.
            verify_scope(scope).and_then(|()| verify_options(options))
        }
        // The derived scope must pass the same branch rule as construction.
        MethodCall::WithBranch { id } => check("scope.branch", id, &IDENTIFIER),
        MethodCall::On { name } => parse_event_name(name).map(drop),
        MethodCall::Log { level, message, meta } => verify_log(level, message, meta),
        MethodCall::OrganizationsGetMany { filter } => verify_filter(filter),
        MethodCall::OrganizationsGetOne { id } | MethodCall::ExperienceBootstrap { id } => {
            check("id", id, &NON_BLANK)
        }
        MethodCall::LocationsGetMany { scope, filter } => {
            BranchScope::try_from(scope).and_then(|_| verify_filter(filter))
        }
        MethodCall::LocationsGetOne { scope, id } => {
            BranchScope::try_from(scope).and_then(|_| check("id", id, &NON_BLANK))
        }
        MethodCall::ContentGetMany { scope, content_type, filter } => BranchScope::try_from(scope)
            .and_then(|_| check("type", content_type, &NON_BLANK))
            .and_then(|()| verify_filter(filter)),
        MethodCall::ContentGetOne { scope, content_type, id } => BranchScope::try_from(scope)
            .and_then(|_| check("type", content_type, &NON_BLANK))
            .and_then(|()| check("id", id, &NON_BLANK)),
        MethodCall::CompositeQuery { scope, query } => BranchScope::try_from(scope)
            .and_then(|_| check("query", query, &NonEmptyObjectValidator)),
    };

    if let Err(ref err) = result {
        debug!(method = call.name(), error = %err, "argument validation failed");
    }
    result
}

/// Parse a log level by its exact wire name.
///
/// # Errors
/// Names the rejected value and the accepted set.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level.parse().map_err(|_| {
        let accepted: Vec<&str> = LogLevel::ALL.iter().map(LogLevel::as_str).collect();
        ForteError::invalid_argument(format!(
            "Log level \"{}\" is invalid. Use one of: {}",
            level,
            accepted.join(", ")
        ))
    })
}

/// Parse a subscribable event name.
///
/// # Errors
/// Names the unsupported event.
pub fn parse_event_name(name: &str) -> Result<EventName> {
    name.parse()
        .map_err(|_| ForteError::invalid_argument(format!("\"{}\" is not a supported event.", name)))
}

fn check<T, V>(field: &str, value: &T, validator: &V) -> Result<()>
where
    T: ?Sized,
    V: FieldValidator<T>,
{
    validator.validate(value).map_err(|_| ForteError::invalid_argument(field))
}

fn verify_scope(scope: &Scope) -> Result<()> {
    check("scope.hostname", scope.hostname(), &IDENTIFIER)?;
    check("scope.trunk", scope.trunk(), &IDENTIFIER)?;
    match scope.branch() {
        Some(branch) => check("scope.branch", branch, &IDENTIFIER),
        None => Ok(()),
    }
}

fn verify_options(options: Option<&ClientOptions>) -> Result<()> {
    match options {
        Some(options) if options.is_empty() => Err(ForteError::invalid_argument("options")),
        _ => Ok(()),
    }
}

fn verify_log(level: &str, message: &str, meta: Option<&Value>) -> Result<()> {
    parse_log_level(level)?;

    if NON_BLANK.validate(message).is_err() {
        return Err(ForteError::invalid_argument(format!("Message \"{}\" is invalid.", message)));
    }

    match meta {
        Some(Value::Object(_) | Value::Array(_)) | None => Ok(()),
        Some(Value::String(text)) => {
            Err(ForteError::invalid_argument(format!("Meta \"{}\" is invalid.", text)))
        }
        Some(other) => Err(ForteError::invalid_argument(format!("Meta \"{}\" is invalid.", other))),
    }
}

fn verify_filter(filter: &Filter) -> Result<()> {
    if filter.is_empty() {
        return Err(ForteError::invalid_argument("filter"));
    }
    Ok(())
}
