//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::{RosterError, RosterResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";

/// Prefix for environment variable overrides, e.g. `ROSTER_SERVER__PORT`.
pub const ENV_PREFIX: &str = "ROSTER";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Untracked local overrides
    /// 4. Environment variables with `ROSTER_` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> RosterResult<Self> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> RosterResult<Self> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config,
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> RosterResult<Self> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previous configuration is kept.
    pub fn reload(&mut self) -> RosterResult<()> {
        self.config = Self::load_config(&self.config_dir, &self.environment)?;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &Path, environment: &str) -> RosterResult<AppConfig> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let candidates = [
            config_dir.join("default.toml"),
            config_dir.join(format!("{environment}.toml")),
            config_dir.join("local.toml"),
        ];
        for path in candidates.iter().filter(|p| p.exists()) {
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_roster_error)?;

        if app_config.app.environment != environment {
            debug!(
                "Environment from {} overrides app.environment ({} -> {})",
                ENVIRONMENT_VAR, app_config.app.environment, environment
            );
            app_config.app.environment = environment.to_string();
        }

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> RosterResult<()> {
        if config.app.environment == "production" && config.database.is_in_memory() {
            warn!("Using an in-memory database in production; data will not survive a restart");
        }

        ConfigValidator::validate(config)
            .map_err(|errors| RosterError::configuration(format_validation_errors(&errors)))
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::configuration(err.to_string())
}
