use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use forte_core::{AuthListener, HttpTransport, TransportConfig, TransportFactory};
use forte_domain::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, HEADER_FINGERPRINT, HEADER_HOSTNAME, SDK_VERSION,
};
use forte_domain::{ApiResponse, ForteError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::{provider_for, AccessTokenProvider};
use super::fingerprint::client_fingerprint;
use crate::errors::{status_error, InfraError};

/// HTTP client for one Forte API client instance.
pub struct ForteHttpClient {
    client: ReqwestClient,
    base_url: String,
    hostname: String,
    fingerprint: Option<String>,
    timeout: Duration,
    tokens: Box<dyn AccessTokenProvider>,
    on_auth: AuthListener,
}

impl ForteHttpClient {
    /// Start building a client for `config`.
    pub fn builder(config: TransportConfig, on_auth: AuthListener) -> ForteHttpClientBuilder {
        ForteHttpClientBuilder::new(config, on_auth)
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ForteError {
        if err.is_timeout() {
            ForteError::Timeout(self.timeout_ms())
        } else {
            InfraError::from(err).into()
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = self.url_for(path);
        let token = self.tokens.access_token().await?;

        let mut request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header(HEADER_HOSTNAME, &self.hostname);

        if let Some(fingerprint) = &self.fingerprint {
            request = request.header(HEADER_FINGERPRINT, fingerprint);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "sending HTTP request");
        let response = request.send().await.map_err(|err| self.map_send_error(err))?;
        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = status_error(status, &url, text);
            if matches!(err, ForteError::Auth(_)) {
                warn!(%url, %status, "request rejected as unauthenticated");
                self.tokens.invalidate().await;
                (self.on_auth)(&Err(err.clone()));
            }
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|err| self.map_send_error(err))?;
        let data = if bytes.is_empty()
            || status == StatusCode::NO_CONTENT
            || status == StatusCode::RESET_CONTENT
        {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ForteError::Client(format!("Failed to parse response: {}", e)))?
        };

        Ok(ApiResponse::new(status.as_u16(), data))
    }
}

#[async_trait]
impl HttpTransport for ForteHttpClient {
    #[instrument(skip(self, query))]
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<ApiResponse> {
        self.execute(Method::GET, path, query, None).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }
}

/// Builder for [`ForteHttpClient`].
pub struct ForteHttpClientBuilder {
    config: TransportConfig,
    on_auth: AuthListener,
    timeout: Duration,
    user_agent: String,
}

impl ForteHttpClientBuilder {
    fn new(config: TransportConfig, on_auth: AuthListener) -> Self {
        Self {
            config,
            on_auth,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: format!("forte-sdk/{}", SDK_VERSION),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// # Errors
    /// Returns [`ForteError::Config`] if the reqwest client cannot be built.
    pub fn build(self) -> Result<ForteHttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|e| ForteError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let TransportConfig { hostname, credentials, options } = self.config;
        let base_url = options.url.trim_end_matches('/').to_string();
        let tokens =
            provider_for(&credentials, &client, &base_url, &hostname, self.timeout, &self.on_auth);
        let fingerprint = options.fingerprinting_enabled.then(|| client_fingerprint(&hostname));

        Ok(ForteHttpClient {
            client,
            base_url,
            hostname,
            fingerprint,
            timeout: self.timeout,
            tokens,
            on_auth: self.on_auth,
        })
    }
}

/// [`TransportFactory`] producing [`ForteHttpClient`]s.
#[derive(Debug, Clone)]
pub struct ReqwestTransportFactory {
    timeout: Duration,
}

impl ReqwestTransportFactory {
    pub fn new() -> Self {
        Self { timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS) }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ReqwestTransportFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn connect(&self, config: TransportConfig, on_auth: AuthListener) -> Result<Arc<dyn HttpTransport>> {
        let client = ForteHttpClient::builder(config, on_auth).timeout(self.timeout).build()?;
        Ok(Arc::new(client))
    }
}
