//! Configuration loading and validation for the students API.
//!
//! Values come from an optional YAML file (`--config` / `CONFIG_PATH`) and are
//! then overridden by environment variables. Nested keys use `__` as the
//! separator, e.g. `HTTP_SERVER__ADDR`. The process exits with a clear error
//! message if any required value is missing or invalid.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServer {
    /// Bind address, e.g. `"localhost:8082"`. **Required.**
    pub addr: String,
}

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment label (`"local"`, `"prod"`, ...).
    #[serde(default = "default_env")]
    pub env: String,

    /// Path to the SQLite database file. **Required.**
    pub storage_path: String,

    /// HTTP listener settings. **Required.**
    pub http_server: HttpServer,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP endpoint for span export. Export is disabled when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Per-request timeout applied by the middleware stack.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// How long in-flight requests may drain after a shutdown signal.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Report missing students as `404` instead of the historical `500`.
    #[serde(default)]
    pub not_found_as_404: bool,
}

fn default_env() -> String {
    "prod".into()
}
fn default_log_level() -> String {
    "info".into()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_shutdown_timeout() -> u64 {
    5
}

impl Config {
    /// Load and validate configuration from `file` (if any) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `file` is given but missing, if any required value
    /// is absent, or if a value cannot be parsed.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = file {
            if !path.exists() {
                anyhow::bail!("config file doesn't exist: {}", path.display());
            }
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let cfg = builder
            .add_source(::config::Environment::default().separator("__"))
            .build()
            .context("failed to build configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.env, "ENV")?;
        ensure_non_empty(&self.storage_path, "STORAGE_PATH")?;
        ensure_non_empty(&self.http_server.addr, "HTTP_SERVER__ADDR")?;

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }
        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT_SECS must be > 0");
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}
