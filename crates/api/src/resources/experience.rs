//! Experience resource.

use std::future::Future;

use forte_core::{paths, validate, MethodCall};
use forte_domain::{ApiResponse, Result};
use tracing::instrument;

use crate::client::ForteApi;

/// Session and bootstrap data for a front-end experience.
pub struct ExperienceResource<'c> {
    client: &'c ForteApi,
}

impl<'c> ExperienceResource<'c> {
    pub(crate) fn new(client: &'c ForteApi) -> Self {
        Self { client }
    }

    /// Check the current session. Takes no arguments, so there is nothing
    /// to reject up front.
    #[instrument(skip_all)]
    pub fn session(&self) -> impl Future<Output = Result<ApiResponse>> + Send + 'static {
        self.client.get(paths::experience::session(), Vec::new())
    }

    /// Fetch the bootstrap document of experience `id`.
    #[instrument(skip(self))]
    pub fn bootstrap(&self, id: &str) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        validate(&MethodCall::ExperienceBootstrap { id })?;
        Ok(self.client.get(paths::experience::bootstrap(id), Vec::new()))
    }
}
