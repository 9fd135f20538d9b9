//! Domain types and models

pub mod credentials;
pub mod events;
pub mod log;
pub mod options;
pub mod request;
pub mod scope;
pub mod secret;

pub use credentials::Credentials;
pub use events::{AuthOutcome, EventName};
pub use log::{LogEntry, LogLevel};
pub use options::{ClientOptions, Options};
pub use request::{ApiResponse, Filter};
pub use scope::Scope;
pub use secret::SecureString;
