//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `cv_core`:
//! - **Secrets**: credential files read from disk on every call
//! - **Verify**: Twilio Verify `VerificationCheck` client using reqwest,
//!   plus a mock provider for development and tests

// Re-export core types for convenience
pub use cv_core::errors::{ProviderError, SecretError};

/// Secret store module - credential files
pub mod secrets;

/// Verification provider module - Twilio Verify and mock
pub mod verify;

pub use secrets::FileSecretStore;
pub use verify::{MockVerifyProvider, TwilioVerifyProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
