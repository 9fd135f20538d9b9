//! Port interfaces for the HTTP collaborator
//!
//! These traits define the boundary between request shaping and the
//! transport that actually talks to the Forte API.

use std::sync::Arc;

use async_trait::async_trait;
use forte_domain::{ApiResponse, AuthOutcome, Credentials, Options, Result};
use serde_json::Value;

/// Callback the transport invokes once per authentication attempt.
pub type AuthListener = Arc<dyn Fn(&AuthOutcome) + Send + Sync>;

/// Sends requests to the Forte API.
///
/// Implementations own authentication, headers and status mapping. A
/// non-2xx response is an error; `Ok` always carries a success status.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `path`, with `query` appended as query-string pairs.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<ApiResponse>;

    /// POST `body` as JSON to `path`.
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse>;
}

/// What a transport needs to know about the client it serves.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub hostname: String,
    pub credentials: Arc<Credentials>,
    pub options: Arc<Options>,
}

/// Builds one transport per client.
///
/// Every client, including those derived with a narrower branch, gets its
/// own transport wired to its own auth listener.
pub trait TransportFactory: Send + Sync {
    /// # Errors
    /// Returns an error when the transport cannot be initialised.
    fn connect(&self, config: TransportConfig, on_auth: AuthListener) -> Result<Arc<dyn HttpTransport>>;
}
