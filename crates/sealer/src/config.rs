//! Configuration loading and validation for the sealer service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any variable is present but invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated sealer service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_http_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be a non-zero port number");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}
