//! # Forte Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport (auth, fingerprint, status mapping)
//! - Configuration loading from env, JSON and TOML
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `forte-core`
//! - Depends on `forte-domain` and `forte-core`
//! - Contains all "impure" code (network, file system, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use observability::{init_tracing, LogFormat, TracingConfig};
