//! Access tokens for Forte API requests
//!
//! Bearer credentials are used as-is. Key pair credentials are exchanged for
//! a bearer token on first use; the token is cached until the API rejects it.

use std::time::Duration;

use async_trait::async_trait;
use forte_core::paths;
use forte_core::AuthListener;
use forte_domain::constants::HEADER_HOSTNAME;
use forte_domain::{ApiResponse, AuthOutcome, Credentials, ForteError, Result, SecureString};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::errors::{status_error, InfraError};

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    async fn access_token(&self) -> Result<String>;

    /// Forget any cached token after the API rejected it.
    async fn invalidate(&self) {}
}

/// Provider for bearer token credentials.
pub struct StaticToken {
    token: SecureString,
}

impl StaticToken {
    pub fn new(token: impl Into<SecureString>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.expose().to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeRequest<'a> {
    public_key: &'a str,
    private_key: &'a str,
    hostname: &'a str,
}

#[derive(Deserialize)]
struct ExchangeResponse {
    token: SecureString,
}

/// Provider that trades a key pair for a bearer token.
///
/// Each exchange, successful or not, is reported to the auth listener
/// exactly once. Concurrent callers wait on the same exchange.
pub struct KeyPairExchange {
    client: reqwest::Client,
    token_url: String,
    hostname: String,
    private_key: SecureString,
    public_key: String,
    timeout: Duration,
    cached: Mutex<Option<SecureString>>,
    on_auth: AuthListener,
}

impl KeyPairExchange {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        hostname: impl Into<String>,
        private_key: impl Into<SecureString>,
        public_key: impl Into<String>,
        timeout: Duration,
        on_auth: AuthListener,
    ) -> Self {
        Self {
            client,
            token_url: format!("{}{}", base_url.trim_end_matches('/'), paths::AUTH_TOKEN),
            hostname: hostname.into(),
            private_key: private_key.into(),
            public_key: public_key.into(),
            timeout,
            cached: Mutex::new(None),
            on_auth,
        }
    }

    #[instrument(skip(self), fields(url = %self.token_url))]
    async fn exchange(&self) -> Result<SecureString> {
        let outcome = self.request_token().await;
        let (token, reported): (Result<SecureString>, AuthOutcome) = match outcome {
            Ok((token, response)) => (Ok(token), Ok(response)),
            Err(err) => (Err(err.clone()), Err(err)),
        };
        (self.on_auth)(&reported);

        match &token {
            Ok(_) => info!("key pair exchange succeeded"),
            Err(err) => warn!(error = %err, "key pair exchange failed"),
        }
        token
    }

    async fn request_token(&self) -> Result<(SecureString, ApiResponse)> {
        let body = ExchangeRequest {
            public_key: &self.public_key,
            private_key: self.private_key.expose(),
            hostname: &self.hostname,
        };

        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .header(HEADER_HOSTNAME, &self.hostname)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ForteError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
                } else {
                    ForteError::from(InfraError::from(err))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = status_error(status, &self.token_url, text);
            // Any rejection of the key pair is an authentication failure.
            return Err(match err {
                ForteError::Client(message) => ForteError::Auth(message),
                other => other,
            });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ForteError::Auth(format!("Invalid token exchange response: {}", e)))?;
        let parsed: ExchangeResponse = serde_json::from_value(data.clone())
            .map_err(|_| ForteError::Auth("Token exchange response did not contain a token".into()))?;

        Ok((parsed.token, ApiResponse::new(status.as_u16(), data)))
    }
}

#[async_trait]
impl AccessTokenProvider for KeyPairExchange {
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.expose().to_string());
        }

        debug!("no cached token, exchanging key pair");
        let token = self.exchange().await?;
        let exposed = token.expose().to_string();
        *cached = Some(token);
        Ok(exposed)
    }

    async fn invalidate(&self) {
        if self.cached.lock().await.take().is_some() {
            debug!("cached token invalidated");
        }
    }
}

/// Pick the provider matching `credentials`.
pub(crate) fn provider_for(
    credentials: &Credentials,
    client: &reqwest::Client,
    base_url: &str,
    hostname: &str,
    timeout: Duration,
    on_auth: &AuthListener,
) -> Box<dyn AccessTokenProvider> {
    match credentials {
        Credentials::BearerToken { bearer_token } => Box::new(StaticToken::new(bearer_token.clone())),
        Credentials::KeyPair { private_key, public_key } => Box::new(KeyPairExchange::new(
            client.clone(),
            base_url,
            hostname,
            private_key.clone(),
            public_key.as_str(),
            timeout,
            on_auth.clone(),
        )),
    }
}
