//! Client event vocabulary

use serde::{Deserialize, Serialize};

use crate::errors::ForteError;
use crate::impl_wire_name_conversions;
use crate::types::request::ApiResponse;

/// Events a client can be subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    /// Outcome of an authentication attempt made by the HTTP layer.
    Auth,
}

impl_wire_name_conversions!(EventName {
    Auth => "auth",
});

/// Payload delivered to `auth` subscribers: the response of a successful
/// authentication attempt or the error of a failed one.
pub type AuthOutcome = Result<ApiResponse, ForteError>;
