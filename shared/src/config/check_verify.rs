//! Provider settings for the verification check

use ::config::{builder::DefaultState, Config, ConfigBuilder, Environment as EnvironmentSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required key is missing or could not be deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A key is present but its value is unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings for calling the Twilio Verify `VerificationCheck` endpoint.
///
/// Keys are read from environment variables, case-insensitively, so both
/// `twilio_check_verify_endpoint` and `TWILIO_CHECK_VERIFY_ENDPOINT` work.
/// The three provider keys are required; loading fails when any is absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckVerifySettings {
    /// Full URL of the VerificationCheck resource
    pub twilio_check_verify_endpoint: String,

    /// File holding the Twilio auth token
    pub twilio_auth_token_path: PathBuf,

    /// File holding the Twilio account SID
    pub twilio_account_sid_path: PathBuf,

    /// Timeout applied to the provider call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub twilio_request_timeout_secs: u64,
}

impl CheckVerifySettings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Config::builder().add_source(EnvironmentSource::default()))
    }

    /// Load settings from a prepared builder
    ///
    /// Used by `from_env` and by tests that supply values through overrides
    /// instead of mutating the process environment.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.twilio_check_verify_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "twilio_check_verify_endpoint",
                reason: "must not be empty".to_string(),
            });
        }
        if self.twilio_auth_token_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "twilio_auth_token_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.twilio_account_sid_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "twilio_account_sid_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.twilio_request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "twilio_request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}
