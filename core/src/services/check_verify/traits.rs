//! Ports implemented by the infrastructure layer

use async_trait::async_trait;
use std::path::Path;

use crate::domain::AuthHeaders;
use crate::errors::{ProviderError, SecretError};

/// Outbound VerificationCheck request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// Endpoint URL
    pub endpoint: String,
    /// Form-encoded body, `To=...&Code=...`
    pub body: String,
    pub headers: AuthHeaders,
}

/// Trait for the verification provider integration
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Send one VerificationCheck request
    ///
    /// Returns the raw response body of a 2xx response. Non-2xx responses
    /// and transport failures are errors; nothing is retried.
    async fn check_verification(&self, request: ProviderRequest) -> Result<String, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Trait for reading credentials
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read the secret stored at `path`
    ///
    /// Implementations return the first line of the secret with
    /// surrounding whitespace stripped (see [`parse_secret`](super::parse_secret)).
    async fn read_secret(&self, path: &Path) -> Result<String, SecretError>;
}
