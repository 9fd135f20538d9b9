//! Reqwest-backed HTTP collaborator for the Forte API
//!
//! Implements the `forte-core` transport ports: attaches authentication and
//! client identification headers, performs the key pair exchange when
//! needed, reports authentication outcomes and maps HTTP statuses onto
//! [`forte_domain::ForteError`]. Requests are sent once; there is no retry.

pub mod auth;
pub mod client;
pub mod fingerprint;

pub use auth::{AccessTokenProvider, KeyPairExchange, StaticToken};
pub use client::{ForteHttpClient, ForteHttpClientBuilder, ReqwestTransportFactory};
pub use fingerprint::client_fingerprint;
