//! Tracing subscriber setup
//!
//! The SDK only emits `tracing` events. Applications that do not install
//! their own subscriber can call [`init_tracing`] once at startup.
//!
//! ```no_run
//! use forte_infra::observability::{init_tracing, TracingConfig};
//!
//! init_tracing(&TracingConfig::default()).expect("tracing");
//! ```

use forte_domain::{ForteError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "FORTE_LOG";

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Directives used when `FORTE_LOG` is unset or invalid.
    pub default_directive: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self { default_directive: "info".to_string(), format: LogFormat::Pretty, with_target: true }
    }
}

impl TracingConfig {
    pub fn json() -> Self {
        Self { format: LogFormat::Json, ..Self::default() }
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_env(LOG_ENV_VAR) {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.default_directive).map_err(|e| {
                ForteError::Config(format!(
                    "Invalid log directive {:?}: {}",
                    self.default_directive, e
                ))
            }),
        }
    }
}

/// Install a global subscriber.
///
/// Returns `Ok(false)` if a global subscriber was already set.
///
/// # Errors
/// Returns [`ForteError::Config`] when the default directive cannot be parsed.
pub fn init_tracing(config: &TracingConfig) -> Result<bool> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(config.with_target))
            .try_init(),
    };

    Ok(installed.is_ok())
}
