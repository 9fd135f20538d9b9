//! Caller credentials

use serde::{Deserialize, Serialize};

use super::secret::SecureString;

/// Credentials used to authenticate against the Forte API.
///
/// Exactly one variant is present. A partially filled key pair cannot be
/// expressed with this type; untyped input is checked by the raw validators
/// in `forte-core` before it is turned into a `Credentials` value.
///
/// Secrets are never written out: serializing keeps only the public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credentials {
    /// A ready-to-use bearer token.
    #[serde(rename_all = "camelCase")]
    BearerToken {
        #[serde(skip_serializing)]
        bearer_token: SecureString,
    },
    /// A key pair exchanged for a bearer token on first use.
    #[serde(rename_all = "camelCase")]
    KeyPair {
        #[serde(skip_serializing)]
        private_key: SecureString,
        public_key: String,
    },
}

impl Credentials {
    /// Bearer token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken { bearer_token: SecureString::new(token) }
    }

    /// Key pair credentials.
    pub fn key_pair(private_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self::KeyPair { private_key: SecureString::new(private_key), public_key: public_key.into() }
    }

    /// Short label safe to put in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BearerToken { .. } => "bearer_token",
            Self::KeyPair { .. } => "key_pair",
        }
    }
}
