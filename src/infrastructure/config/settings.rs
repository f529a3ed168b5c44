//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file at the default path yields the
//! built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use wildcard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("wildcard.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use super::optimizer::OptimizerConfig;
use super::solver::SolverConfig;
use crate::application::optimizer::OptimizeParams;
use crate::domain::error::DomainError;
use crate::error::{ConfigError, Result};

/// Path tried when no `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "wildcard.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// ILP backend settings.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Default run parameters, overridable per run.
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load an explicit config file, or the default path when present.
    ///
    /// An explicit path must exist. The default path may be absent, in which
    /// case the built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                debug!(path = DEFAULT_CONFIG_PATH, "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges. Optimizer
    /// defaults follow the same rules as a run's parameters.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be `pretty` or `json`, got `{}`", self.logging.format),
            }
            .into());
        }
        if self.solver.time_limit_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "time_limit_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.params().validate().map_err(|err| match err {
            DomainError::InvalidValue { field, reason } => {
                ConfigError::InvalidValue { field, reason }
            }
            other => ConfigError::InvalidValue {
                field: "optimizer",
                reason: other.to_string(),
            },
        })?;
        Ok(())
    }

    /// Default run parameters from the `[optimizer]` section.
    #[must_use]
    pub fn params(&self) -> OptimizeParams {
        OptimizeParams::from(&self.optimizer)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
