//! Conversions from external infrastructure errors into domain errors.

use forte_domain::ForteError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ForteError);

impl From<InfraError> for ForteError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ForteError> for InfraError {
    fn from(value: ForteError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoForteError {
    fn into_forte(self) -> ForteError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ForteError */
/* -------------------------------------------------------------------------- */

impl IntoForteError for HttpError {
    fn into_forte(self) -> ForteError {
        if self.is_timeout() {
            return ForteError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ForteError::Network(format!("HTTP connection failure: {}", self));
        }

        if let Some(status) = self.status() {
            let url = self.url().map(ToString::to_string).unwrap_or_default();
            return status_error(status, &url, String::new());
        }

        if self.is_decode() {
            return ForteError::Client(format!("Failed to decode response: {}", self));
        }

        ForteError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_forte())
    }
}

/* -------------------------------------------------------------------------- */
/* HTTP status → ForteError */
/* -------------------------------------------------------------------------- */

/// Classify a non-success status.
pub fn status_error(status: StatusCode, url: &str, body: String) -> ForteError {
    let message = if body.is_empty() {
        format!("{} returned status {}", url, status)
    } else {
        format!("{} returned status {}: {}", url, status, body)
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ForteError::Auth(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ForteError::RateLimit(message)
    } else if status.is_server_error() {
        ForteError::Server(message)
    } else if status.is_client_error() {
        ForteError::Client(message)
    } else {
        ForteError::Network(message)
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
