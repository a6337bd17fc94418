//! Shared utilities and common types for the check-verify adapter
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (provider settings, environment, logging, server)
//! - The function response wire shape
//! - Utility functions (phone masking, recipient classification)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use self::config::{
    AppConfig, CheckVerifySettings, ConfigError, Environment, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use types::{FunctionResponse, HealthResponse};
pub use utils::phone;
