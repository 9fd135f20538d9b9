//! Content resource.

use std::future::Future;

use forte_core::{paths, validate, BranchScope, MethodCall};
use forte_domain::{ApiResponse, Filter, Result};
use tracing::instrument;

use crate::client::ForteApi;

/// Typed content published to the client's branch.
pub struct ContentResource<'c> {
    client: &'c ForteApi,
}

impl<'c> ContentResource<'c> {
    pub(crate) fn new(client: &'c ForteApi) -> Self {
        Self { client }
    }

    /// List content items of `content_type` matching `filter`.
    ///
    /// # Errors
    /// `InvalidArgument` for a trunk-only scope (`scope.branch`), a blank
    /// type (`type`) or an empty filter (`filter`).
    #[instrument(skip(self, filter))]
    pub fn get_many(
        &self,
        content_type: &str,
        filter: &Filter,
    ) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        let scope = self.client.get_scope();
        validate(&MethodCall::ContentGetMany { scope, content_type, filter })?;
        let path = paths::content::get_many(BranchScope::try_from(scope)?, content_type);
        Ok(self.client.get(path, filter.to_query_pairs()))
    }

    /// Get one content item.
    #[instrument(skip(self))]
    pub fn get_one(
        &self,
        content_type: &str,
        id: &str,
    ) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        let scope = self.client.get_scope();
        validate(&MethodCall::ContentGetOne { scope, content_type, id })?;
        let path = paths::content::get_one(BranchScope::try_from(scope)?, content_type, id);
        Ok(self.client.get(path, Vec::new()))
    }
}
