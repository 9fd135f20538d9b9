//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::types::{ClientOptions, Credentials, Scope};

/// Everything needed to build a client, as loaded from env or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForteConfig {
    pub credentials: Credentials,
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ClientOptions>,
}
