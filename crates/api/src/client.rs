//! The Forte API client
//!
//! A [`ForteApi`] is bound to one scope. Every public operation validates
//! its arguments before the transport is touched, so a malformed call fails
//! with [`ForteError::InvalidArgument`] and never reaches the network.
//!
//! Network operations validate eagerly and return the request as a future:
//! `api.log("info", "hi", None)?.await?`. The first `?` surfaces argument
//! errors, the second transport errors.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use forte_core::validation::{parse_event_name, parse_log_level};
use forte_core::{
    validate, AuthListener, EventRegistry, HttpTransport, MethodCall, SubscriptionId,
    TransportConfig, TransportFactory,
};
use forte_domain::{
    ApiResponse, AuthOutcome, ClientOptions, Credentials, EventName, ForteError, LogEntry, Options,
    Result, Scope,
};
use forte_infra::ReqwestTransportFactory;
use serde_json::Value;
use tracing::{debug, instrument, Instrument, Span};

use crate::resources::{
    CompositeResource, ContentResource, ExperienceResource, LocationsResource,
    OrganizationsResource,
};

/// Client for the Forte API, bound to a single scope.
///
/// Clients are cheap to derive: [`ForteApi::with_branch`] shares the
/// credentials and options of its parent but owns its scope, its event
/// registry and its transport.
pub struct ForteApi {
    credentials: Arc<Credentials>,
    options: Arc<Options>,
    scope: Arc<Scope>,
    events: Arc<EventRegistry>,
    transport: Arc<dyn HttpTransport>,
    factory: Arc<dyn TransportFactory>,
}

impl ForteApi {
    /// Start building a client.
    pub fn builder(credentials: Credentials, scope: Scope) -> ForteApiBuilder {
        ForteApiBuilder::new(credentials, scope)
    }

    fn connect(
        credentials: Arc<Credentials>,
        options: Arc<Options>,
        scope: Arc<Scope>,
        factory: Arc<dyn TransportFactory>,
    ) -> Result<Self> {
        let events = Arc::new(EventRegistry::new());
        let sink = Arc::clone(&events);
        let on_auth: AuthListener =
            Arc::new(move |outcome: &AuthOutcome| sink.emit(EventName::Auth, outcome));

        let transport = factory.connect(
            TransportConfig {
                hostname: scope.hostname().to_string(),
                credentials: Arc::clone(&credentials),
                options: Arc::clone(&options),
            },
            on_auth,
        )?;

        debug!(
            hostname = scope.hostname(),
            trunk = scope.trunk(),
            branch = scope.branch(),
            credentials = credentials.kind(),
            "client created"
        );
        Ok(Self { credentials, options, scope, events, transport, factory })
    }

    /// Derive a client bound to branch `id` of the current trunk.
    ///
    /// The parent client and its scope are left untouched.
    ///
    /// # Errors
    /// Fails with `InvalidArgument("scope.branch")` when `id` is empty.
    pub fn with_branch(&self, id: &str) -> Result<Self> {
        validate(&MethodCall::WithBranch { id })?;
        let scope = Arc::new(self.scope.derive(id));
        Self::connect(
            Arc::clone(&self.credentials),
            Arc::clone(&self.options),
            scope,
            Arc::clone(&self.factory),
        )
    }

    /// The scope this client is bound to.
    pub fn get_scope(&self) -> &Scope {
        &self.scope
    }

    /// Effective options after defaults were applied.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Subscribe to an event by name. Only `"auth"` is supported.
    ///
    /// # Errors
    /// Fails with `"<name>" is not a supported event.` for any other name.
    pub fn on<F>(&self, name: &str, handler: F) -> Result<SubscriptionId>
    where
        F: Fn(&AuthOutcome) + Send + Sync + 'static,
    {
        validate(&MethodCall::On { name })?;
        let event = parse_event_name(name)?;
        Ok(self.events.subscribe(event, Arc::new(handler)))
    }

    /// Subscribe to authentication outcomes.
    ///
    /// Handlers run synchronously, in registration order, on the task that
    /// performed the authentication.
    pub fn on_auth<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&AuthOutcome) + Send + Sync + 'static,
    {
        self.events.subscribe(EventName::Auth, Arc::new(handler))
    }

    /// Remove a handler added with [`ForteApi::on`] or [`ForteApi::on_auth`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Send a log entry to the developer log.
    ///
    /// # Errors
    /// Fails before sending when the level is unknown, the message is blank
    /// or `meta` is neither an object nor an array.
    #[instrument(skip(self, message, meta))]
    pub fn log(
        &self,
        level: &str,
        message: &str,
        meta: Option<&Value>,
    ) -> Result<impl Future<Output = Result<ApiResponse>> + Send + 'static> {
        validate(&MethodCall::Log { level, message, meta })?;
        let entry = LogEntry {
            level: parse_log_level(level)?,
            message: message.to_string(),
            meta: meta.cloned(),
        };
        let body = serde_json::to_value(&entry)
            .map_err(|e| ForteError::Client(format!("Failed to encode log entry: {}", e)))?;
        Ok(self.post(forte_core::paths::LOG.to_string(), body))
    }

    pub fn organizations(&self) -> OrganizationsResource<'_> {
        OrganizationsResource::new(self)
    }

    pub fn locations(&self) -> LocationsResource<'_> {
        LocationsResource::new(self)
    }

    pub fn content(&self) -> ContentResource<'_> {
        ContentResource::new(self)
    }

    pub fn composite(&self) -> CompositeResource<'_> {
        CompositeResource::new(self)
    }

    pub fn experience(&self) -> ExperienceResource<'_> {
        ExperienceResource::new(self)
    }

    /// GET `path` once awaited. The future owns everything it needs and
    /// runs inside the caller's span.
    pub(crate) fn get(
        &self,
        path: String,
        query: Vec<(String, String)>,
    ) -> impl Future<Output = Result<ApiResponse>> + Send + 'static {
        let transport = Arc::clone(&self.transport);
        async move { transport.get(&path, &query).await }.instrument(Span::current())
    }

    pub(crate) fn post(
        &self,
        path: String,
        body: Value,
    ) -> impl Future<Output = Result<ApiResponse>> + Send + 'static {
        let transport = Arc::clone(&self.transport);
        async move { transport.post(&path, &body).await }.instrument(Span::current())
    }
}

impl fmt::Debug for ForteApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForteApi")
            .field("credentials", &self.credentials)
            .field("options", &self.options)
            .field("scope", &self.scope)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ForteApi`].
///
/// Used by the `create_api*` functions; reach for it directly to supply a
/// custom [`TransportFactory`].
pub struct ForteApiBuilder {
    credentials: Credentials,
    scope: Scope,
    options: Option<ClientOptions>,
    factory: Option<Arc<dyn TransportFactory>>,
}

impl ForteApiBuilder {
    fn new(credentials: Credentials, scope: Scope) -> Self {
        Self { credentials, scope, options: None, factory: None }
    }

    #[must_use]
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn transport_factory(mut self, factory: Arc<dyn TransportFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Validate the inputs and connect the transport.
    ///
    /// # Errors
    /// `InvalidArgument` naming the first malformed field, or whatever the
    /// transport factory reports.
    pub fn build(self) -> Result<ForteApi> {
        validate(&MethodCall::CreateApi {
            credentials: &self.credentials,
            scope: &self.scope,
            options: self.options.as_ref(),
        })?;

        let options = self.options.unwrap_or_default().resolve();
        let factory = self.factory.unwrap_or_else(|| Arc::new(ReqwestTransportFactory::new()));
        ForteApi::connect(Arc::new(self.credentials), Arc::new(options), Arc::new(self.scope), factory)
    }
}
