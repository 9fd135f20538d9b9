//! In-memory transport shared by the facade integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use forte::{
    ApiResponse, AuthOutcome, ClientOptions, Credentials, ForteApi, ForteError, HttpTransport, Result,
    Scope,
    TransportConfig, TransportFactory,
};
use forte_core::AuthListener;
use parking_lot::Mutex;
use serde_json::Value;

/// One request seen by a [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get { path: String, query: Vec<(String, String)> },
    Post { path: String, body: Value },
}

/// Transport that records requests and answers `200` with `data: null`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<ApiResponse> {
        self.requests.lock().push(Recorded::Get { path: path.to_string(), query: query.to_vec() });
        Ok(ApiResponse::new(200, Value::Null))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.requests.lock().push(Recorded::Post { path: path.to_string(), body: body.clone() });
        Ok(ApiResponse::new(200, Value::Null))
    }
}

/// A transport handed out by [`RecordingFactory`], with what it was given.
pub struct Connection {
    pub config: TransportConfig,
    pub on_auth: AuthListener,
    pub transport: Arc<RecordingTransport>,
}

/// Factory creating one [`RecordingTransport`] per client.
#[derive(Default)]
pub struct RecordingFactory {
    connections: Mutex<Vec<Connection>>,
}

impl RecordingFactory {
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Requests sent by the client connected `index`-th.
    pub fn requests(&self, index: usize) -> Vec<Recorded> {
        self.connections.lock()[index].transport.requests()
    }

    /// Total requests across every client.
    pub fn total_requests(&self) -> usize {
        self.connections.lock().iter().map(|c| c.transport.requests().len()).sum()
    }

    pub fn config(&self, index: usize) -> TransportConfig {
        self.connections.lock()[index].config.clone()
    }

    /// Report an authentication outcome as the `index`-th transport would.
    pub fn signal_auth(&self, index: usize, outcome: &AuthOutcome) {
        let listener = Arc::clone(&self.connections.lock()[index].on_auth);
        listener(outcome);
    }
}

impl TransportFactory for RecordingFactory {
    fn connect(&self, config: TransportConfig, on_auth: AuthListener) -> Result<Arc<dyn HttpTransport>> {
        let transport = Arc::new(RecordingTransport::default());
        self.connections.lock().push(Connection { config, on_auth, transport: Arc::clone(&transport) });
        Ok(transport)
    }
}

/// The error of a call that must fail before any request is built.
pub fn rejected<T>(result: Result<T>) -> ForteError {
    match result {
        Err(err) => err,
        Ok(_) => panic!("call was accepted"),
    }
}

pub fn branch_scope() -> Scope {
    Scope::with_branch("shop.example.com", "valid", "valid")
}

pub fn trunk_scope() -> Scope {
    Scope::new("shop.example.com", "valid")
}

/// Client over a fresh [`RecordingFactory`].
pub fn recording_client(scope: Scope) -> (ForteApi, Arc<RecordingFactory>) {
    recording_client_with(scope, None)
}

pub fn recording_client_with(
    scope: Scope,
    options: Option<ClientOptions>,
) -> (ForteApi, Arc<RecordingFactory>) {
    let factory = Arc::new(RecordingFactory::default());
    let mut builder = ForteApi::builder(Credentials::bearer("valid"), scope)
        .transport_factory(Arc::clone(&factory) as Arc<dyn TransportFactory>);
    if let Some(options) = options {
        builder = builder.options(options);
    }
    let api = builder.build().expect("valid client");
    (api, factory)
}
