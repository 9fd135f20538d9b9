//! SDK constants
//!
//! Centralized location for defaults and fixed vocabularies.

/// Base URL used when `options.url` is not supplied.
pub const DEFAULT_API_URL: &str = "https://api.powerchord.io";
/// Fingerprinting is opt-out.
pub const DEFAULT_FINGERPRINTING_ENABLED: bool = true;

/// Request timeout used by the bundled HTTP client.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Header names understood by the Forte API
pub const HEADER_HOSTNAME: &str = "X-Forte-Hostname";
pub const HEADER_FINGERPRINT: &str = "X-Forte-Fingerprint";

/// Crate version reported in the user agent and fingerprint.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
