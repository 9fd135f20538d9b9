//! Client options and their defaults

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_URL, DEFAULT_FINGERPRINTING_ENABLED};

/// Caller-supplied option overrides. Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "fingerPrintingEnabled", skip_serializing_if = "Option::is_none")]
    pub fingerprinting_enabled: Option<bool>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Turn client fingerprinting on or off.
    #[must_use]
    pub fn fingerprinting(mut self, enabled: bool) -> Self {
        self.fingerprinting_enabled = Some(enabled);
        self
    }

    /// True when no override is set.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.fingerprinting_enabled.is_none()
    }

    /// Merge the overrides over [`Options::default`].
    pub fn resolve(&self) -> Options {
        let defaults = Options::default();
        Options {
            url: self.url.clone().unwrap_or(defaults.url),
            fingerprinting_enabled: self
                .fingerprinting_enabled
                .unwrap_or(defaults.fingerprinting_enabled),
        }
    }
}

/// Effective options after merging over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub url: String,
    pub fingerprinting_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            fingerprinting_enabled: DEFAULT_FINGERPRINTING_ENABLED,
        }
    }
}
