//! Configuration module
//!
//! - `check_verify` - Twilio Verify endpoint and secret file locations
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration for the function host

pub mod check_verify;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use check_verify::{CheckVerifySettings, ConfigError};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Provider settings
    pub check_verify: CheckVerifySettings,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Fails when any provider setting is missing; server and logging
    /// settings fall back to per-environment defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
            check_verify: CheckVerifySettings::from_env()?,
        })
    }
}
