//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment if one exists
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! - `FORTE_BEARER_TOKEN`: Bearer token credentials
//! - `FORTE_PRIVATE_KEY` / `FORTE_PUBLIC_KEY`: Key pair credentials, used
//!   when no bearer token is set
//! - `FORTE_HOSTNAME`: Scope hostname
//! - `FORTE_TRUNK`: Scope trunk (organization id)
//! - `FORTE_BRANCH`: Optional scope branch
//! - `FORTE_API_URL`: Optional API base URL override
//! - `FORTE_FINGERPRINTING`: Optional fingerprinting toggle (true/false)
//!
//! ## File Format
//! A file holds the three `createApi` arguments under `credentials`,
//! `scope` and `options`, using the same field names as the JavaScript
//! client (`bearerToken`, `fingerPrintingEnabled`, ...).

use std::path::{Path, PathBuf};

use forte_core::decode_create_args;
use forte_domain::{ClientOptions, Credentials, ForteConfig, ForteError, Result, Scope};
use serde_json::Value;

const FILE_STEMS: [&str; 2] = ["forte", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ForteError::Config` if neither source yields a configuration,
/// or `ForteError::InvalidArgument` if a file was found but is malformed.
pub fn load() -> Result<ForteConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ForteError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<ForteConfig> {
    let credentials = match env_opt("FORTE_BEARER_TOKEN") {
        Some(token) => Credentials::bearer(token),
        None => Credentials::key_pair(env_var("FORTE_PRIVATE_KEY")?, env_var("FORTE_PUBLIC_KEY")?),
    };

    let hostname = env_var("FORTE_HOSTNAME")?;
    let trunk = env_var("FORTE_TRUNK")?;
    let scope = match env_opt("FORTE_BRANCH") {
        Some(branch) => Scope::with_branch(hostname, trunk, branch),
        None => Scope::new(hostname, trunk),
    };

    let mut options = ClientOptions::new();
    if let Some(url) = env_opt("FORTE_API_URL") {
        options = options.url(url);
    }
    if let Some(raw) = env_opt("FORTE_FINGERPRINTING") {
        options = options.fingerprinting(parse_bool(&raw).ok_or_else(|| {
            ForteError::Config(format!("Invalid value for FORTE_FINGERPRINTING: {}", raw))
        })?);
    }

    Ok(ForteConfig {
        credentials,
        scope,
        options: if options.is_empty() { None } else { Some(options) },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
///
/// # Errors
/// Returns `ForteError::Config` if the file is missing or unreadable, and
/// `ForteError::InvalidArgument` naming the first malformed field.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ForteConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ForteError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ForteError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ForteError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse a config document. Format is detected by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<ForteConfig> {
    let document = parse_document(contents, path)?;
    config_from_value(&document)
}

fn parse_document(contents: &str, path: &Path) -> Result<Value> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => {
            let table: toml::Table = toml::from_str(contents)
                .map_err(|e| ForteError::Config(format!("Invalid TOML format: {}", e)))?;
            serde_json::to_value(table)
                .map_err(|e| ForteError::Config(format!("Invalid TOML format: {}", e)))
        }
        "json" => serde_json::from_str(contents)
            .map_err(|e| ForteError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ForteError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Run a parsed document through the `createApi` shape rules.
fn config_from_value(document: &Value) -> Result<ForteConfig> {
    if !document.is_object() {
        return Err(ForteError::Config("Config document must be a table".to_string()));
    }

    let (credentials, scope, options) = decode_create_args(
        document.get("credentials").unwrap_or(&Value::Null),
        document.get("scope").unwrap_or(&Value::Null),
        document.get("options"),
    )?;

    Ok(ForteConfig { credentials, scope, options })
}

/// Probe multiple paths for configuration files
///
/// Searches `forte.{json,toml}` then `config.{json,toml}` in the current
/// working directory and up to two parent directories, then next to the
/// executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    ["", "..", "../.."]
        .iter()
        .flat_map(|up| {
            FILE_STEMS.iter().flat_map(move |stem| {
                FILE_EXTENSIONS.iter().map(move |ext| dir.join(up).join(format!("{stem}.{ext}")))
            })
        })
        .collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ForteError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Non-empty environment variable, if set.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
