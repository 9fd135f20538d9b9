//! # Forte Core
//!
//! Request-shaping logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The per-method argument validators
//! - Path templates for every API operation
//! - The typed auth event registry
//! - Port interfaces (traits) for the HTTP collaborator
//!
//! ## Architecture Principles
//! - Only depends on `forte-domain`
//! - No HTTP or file I/O
//! - All external dependencies via traits

pub mod events;
pub mod paths;
pub mod ports;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use events::{AuthHandler, EventRegistry, SubscriptionId};
pub use paths::BranchScope;
pub use ports::{AuthListener, HttpTransport, TransportConfig, TransportFactory};
pub use validation::{decode_create_args, validate, MethodCall};
