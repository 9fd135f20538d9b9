//! Request scope: hostname, trunk and optional branch

use serde::{Deserialize, Serialize};

/// The `(hostname, trunk, branch)` triple every resource path is built from.
///
/// A `Scope` never changes after construction. Narrowing to another branch
/// goes through [`Scope::derive`], which returns a new value and leaves the
/// parent untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    hostname: String,
    trunk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
}

impl Scope {
    /// Trunk-level scope with no branch.
    pub fn new(hostname: impl Into<String>, trunk: impl Into<String>) -> Self {
        Self { hostname: hostname.into(), trunk: trunk.into(), branch: None }
    }

    /// Scope bound to a branch under `trunk`.
    pub fn with_branch(
        hostname: impl Into<String>,
        trunk: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self { hostname: hostname.into(), trunk: trunk.into(), branch: Some(branch.into()) }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn trunk(&self) -> &str {
        &self.trunk
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Structural copy of `self` with `branch` replaced.
    ///
    /// Does not validate anything; hostname and trunk were checked when the
    /// parent was built and the branch id is checked by the caller.
    #[must_use]
    pub fn derive(&self, branch: impl Into<String>) -> Self {
        Self { branch: Some(branch.into()), ..self.clone() }
    }
}
