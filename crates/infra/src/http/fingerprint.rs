//! Client fingerprint sent with every request when fingerprinting is on.

use forte_domain::constants::SDK_VERSION;
use sha2::{Digest, Sha256};

/// Stable identifier for this SDK build talking to `hostname`.
///
/// Hex-encoded SHA-256 over the hostname, SDK version, OS and CPU
/// architecture. Identical inputs always yield the same value.
pub fn client_fingerprint(hostname: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [hostname, SDK_VERSION, std::env::consts::OS, std::env::consts::ARCH] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
