//! # Forte Domain
//!
//! Data types shared by every Forte SDK crate.
//!
//! This crate contains:
//! - Credentials, scope and client option values
//! - The SDK error type and Result alias
//! - Configuration structures
//! - API defaults and other constants
//!
//! ## Architecture
//! - No dependencies on other Forte crates
//! - No I/O; values only

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
