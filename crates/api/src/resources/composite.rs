//! Composite query resource.

use std::future::Future;

use forte_core::{paths, validate, BranchScope, MethodCall};
use forte_domain::{ApiResponse, Result};
use serde_json::Value;
use tracing::instrument;

use crate::client::ForteApi;

pub struct CompositeResource<'c> {
    client: &'c ForteApi,
}

impl<'c> CompositeResource<'c> {
    pub(crate) fn new(client: &'c ForteApi) -> Self {
        Self { client }
    }

    /// Run a composite query against the client's branch.
    ///
    /// `query` must be a non-empty JSON object; it is posted as the body.
    #[instrument(skip_all)]
    pub fn query(&self, query: &Value) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        let scope = self.client.get_scope();
        validate(&MethodCall::CompositeQuery { scope, query })?;
        let path = paths::composite::query(BranchScope::try_from(scope)?);
        Ok(self.client.post(path, query.clone()))
    }
}
