//! Forte API routes
//!
//! Pure functions from an operation and its scope to a URL path. Values are
//! concatenated as-is; callers pass URL-safe ids. Trailing slashes are part
//! of the contract and must not be normalized away.
//!
//! | Operation                    | Path                                                   |
//! |------------------------------|--------------------------------------------------------|
//! | `log`                        | `/developer/log`                                       |
//! | `organizations::get_many`    | `/organizations/`                                      |
//! | `organizations::get_one`     | `/organizations/{id}`                                  |
//! | `locations::get_many`        | `/forte/organizations/{trunk}/{branch}/locations/`     |
//! | `locations::get_one`         | `/forte/organizations/{trunk}/{branch}/locations/{id}` |
//! | `content::get_many`          | `/forte/{trunk}/{branch}/content/{type}/`              |
//! | `content::get_one`           | `/forte/{trunk}/{branch}/content/{type}/{id}`          |
//! | `composite::query`           | `/forte/composite/{trunk}/{branch}/`                   |
//! | `experience::session`        | `/session/check`                                       |
//! | `experience::bootstrap`      | `/forte/bootstrap/{id}`                                |

use forte_domain::{ForteError, Scope};

/// Developer log sink.
pub const LOG: &str = "/developer/log";

/// Key pair exchange endpoint used by the HTTP layer.
pub const AUTH_TOKEN: &str = "/auth/token";

/// Trunk and branch of a scope that is known to carry a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchScope<'a> {
    pub trunk: &'a str,
    pub branch: &'a str,
}

impl<'a> BranchScope<'a> {
    pub const fn new(trunk: &'a str, branch: &'a str) -> Self {
        Self { trunk, branch }
    }
}

impl<'a> TryFrom<&'a Scope> for BranchScope<'a> {
    type Error = ForteError;

    fn try_from(scope: &'a Scope) -> Result<Self, Self::Error> {
        scope
            .branch()
            .map(|branch| Self::new(scope.trunk(), branch))
            .ok_or_else(|| ForteError::invalid_argument("scope.branch"))
    }
}

pub mod organizations {
    pub fn get_many() -> String {
        "/organizations/".to_string()
    }

    pub fn get_one(id: &str) -> String {
        format!("/organizations/{id}")
    }
}

pub mod locations {
    use super::BranchScope;

    pub fn get_many(scope: BranchScope<'_>) -> String {
        format!("/forte/organizations/{}/{}/locations/", scope.trunk, scope.branch)
    }

    pub fn get_one(scope: BranchScope<'_>, id: &str) -> String {
        format!("/forte/organizations/{}/{}/locations/{id}", scope.trunk, scope.branch)
    }
}

pub mod content {
    use super::BranchScope;

    pub fn get_many(scope: BranchScope<'_>, content_type: &str) -> String {
        format!("/forte/{}/{}/content/{content_type}/", scope.trunk, scope.branch)
    }

    pub fn get_one(scope: BranchScope<'_>, content_type: &str, id: &str) -> String {
        format!("/forte/{}/{}/content/{content_type}/{id}", scope.trunk, scope.branch)
    }
}

pub mod composite {
    use super::BranchScope;

    pub fn query(scope: BranchScope<'_>) -> String {
        format!("/forte/composite/{}/{}/", scope.trunk, scope.branch)
    }
}

pub mod experience {
    pub fn session() -> String {
        "/session/check".to_string()
    }

    pub fn bootstrap(id: &str) -> String {
        format!("/forte/bootstrap/{id}")
    }
}
