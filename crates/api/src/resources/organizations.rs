//! Organization resource.

use std::future::Future;

use forte_core::{paths, validate, MethodCall};
use forte_domain::{ApiResponse, Filter, Result};
use tracing::instrument;

use crate::client::ForteApi;

/// Organizations visible to the current credentials.
pub struct OrganizationsResource<'c> {
    client: &'c ForteApi,
}

impl<'c> OrganizationsResource<'c> {
    pub(crate) fn new(client: &'c ForteApi) -> Self {
        Self { client }
    }

    /// List organizations matching `filter`.
    ///
    /// # Errors
    /// `InvalidArgument("filter")` when the filter is empty.
    #[instrument(skip_all)]
    pub fn get_many(
        &self,
        filter: &Filter,
    ) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        validate(&MethodCall::OrganizationsGetMany { filter })?;
        Ok(self.client.get(paths::organizations::get_many(), filter.to_query_pairs()))
    }

    /// Get a single organization.
    ///
    /// # Errors
    /// `InvalidArgument("id")` when `id` is blank.
    #[instrument(skip(self))]
    pub fn get_one(&self, id: &str) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        validate(&MethodCall::OrganizationsGetOne { id })?;
        Ok(self.client.get(paths::organizations::get_one(id), Vec::new()))
    }
}
