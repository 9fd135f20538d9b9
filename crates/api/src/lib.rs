//! # Forte
//!
//! Client SDK for the Forte content platform.
//!
//! A client is created from credentials, a scope and optional option
//! overrides. Every argument is checked before a request is made; malformed
//! input fails with [`ForteError::InvalidArgument`] naming the field.
//!
//! ```no_run
//! use forte::{create_api, Credentials, Filter, Scope};
//!
//! # async fn run() -> forte::Result<()> {
//! let api = create_api(
//!     Credentials::bearer("token"),
//!     Scope::new("shop.example.com", "org-1"),
//!     None,
//! )?;
//!
//! api.on_auth(|outcome| {
//!     if let Err(err) = outcome {
//!         tracing::warn!(error = %err, "authentication failed");
//!     }
//! });
//!
//! let orgs = api.organizations().get_many(&Filter::new().with("active", true))?.await?;
//! let store = api.with_branch("store-7")?;
//! let video = store.content().get_one("video", "intro")?.await?;
//! # let _ = (orgs, video);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod resources;

use forte_core::decode_create_args;
use serde_json::Value;

pub use client::{ForteApi, ForteApiBuilder};
pub use forte_core::{HttpTransport, SubscriptionId, TransportConfig, TransportFactory};
pub use forte_domain::{
    ApiResponse, AuthOutcome, ClientOptions, Credentials, EventName, Filter, ForteConfig,
    ForteError, LogLevel, Options, Result, Scope,
};

/// Create a client.
///
/// # Errors
/// `InvalidArgument` naming the first malformed field, e.g. `scope.trunk`
/// or `options`.
pub fn create_api(
    credentials: Credentials,
    scope: Scope,
    options: Option<ClientOptions>,
) -> Result<ForteApi> {
    let builder = ForteApi::builder(credentials, scope);
    match options {
        Some(options) => builder.options(options).build(),
        None => builder.build(),
    }
}

/// Create a client from untyped JSON arguments.
///
/// Absent, `null`, wrongly typed and empty values are told apart, so input
/// from JSON documents or other dynamic sources is held to the same rules
/// as the JavaScript client.
///
/// # Errors
/// `InvalidArgument` naming the first malformed field.
pub fn create_api_from_value(
    credentials: &Value,
    scope: &Value,
    options: Option<&Value>,
) -> Result<ForteApi> {
    let (credentials, scope, options) = decode_create_args(credentials, scope, options)?;
    create_api(credentials, scope, options)
}

/// Create a client from a loaded configuration.
///
/// # Errors
/// As [`create_api`].
pub fn create_api_from_config(config: &ForteConfig) -> Result<ForteApi> {
    create_api(config.credentials.clone(), config.scope.clone(), config.options.clone())
}
