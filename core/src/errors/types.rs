//! Error types raised by the individual pipeline stages

use std::path::PathBuf;
use thiserror::Error;

/// Schema validation failures for the inbound request and the provider response
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Invalid request fields: {0}")]
    RequestSchema(#[source] serde_json::Error),

    #[error("Request field validation failed: {0}")]
    RequestFields(#[from] validator::ValidationErrors),

    #[error("Invalid provider response: {0}")]
    ProviderResponse(#[source] serde_json::Error),
}

/// Failures reading a credential from a secret file
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Failed to read secret from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Secret file {} is empty", .path.display())]
    Empty { path: PathBuf },
}

/// Failures calling the verification provider
///
/// The variants stay distinct for logging; callers see all of them as an
/// unexpected failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Provider request timed out: {0}")]
    Timeout(String),

    #[error("Could not connect to provider: {0}")]
    Connect(String),

    #[error("Provider transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    /// HTTP status returned by the provider, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
