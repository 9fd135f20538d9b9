//! Location resource.

use std::future::Future;

use forte_core::{paths, validate, BranchScope, MethodCall};
use forte_domain::{ApiResponse, Filter, Result};
use tracing::instrument;

use crate::client::ForteApi;

/// Locations of the client's branch. Requires a branch scope.
pub struct LocationsResource<'c> {
    client: &'c ForteApi,
}

impl<'c> LocationsResource<'c> {
    pub(crate) fn new(client: &'c ForteApi) -> Self {
        Self { client }
    }

    /// List locations matching `filter`.
    #[instrument(skip_all)]
    pub fn get_many(
        &self,
        filter: &Filter,
    ) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        let scope = self.client.get_scope();
        validate(&MethodCall::LocationsGetMany { scope, filter })?;
        let path = paths::locations::get_many(BranchScope::try_from(scope)?);
        Ok(self.client.get(path, filter.to_query_pairs()))
    }

    #[instrument(skip(self))]
    pub fn get_one(&self, id: &str) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        let scope = self.client.get_scope();
        validate(&MethodCall::LocationsGetOne { scope, id })?;
        let path = paths::locations::get_one(BranchScope::try_from(scope)?, id);
        Ok(self.client.get(path, Vec::new()))
    }
}
