//! Error taxonomy for the check-verify pipeline.
//!
//! Every stage error converts into [`CheckVerifyError`], and every
//! `CheckVerifyError` falls into exactly one [`ErrorKind`], which decides
//! the status code of the response.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ProviderError, SecretError, ValidationError};

use std::fmt;
use thiserror::Error;

/// Caller-visible failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or mistyped fields in the request or the provider response
    Validation,
    /// A value failed a basic parse or shape check
    Value,
    /// Anything else: secrets, provider status, network
    Unexpected,
}

impl ErrorKind {
    /// Status code reported for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Value => 400,
            ErrorKind::Unexpected => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Value => "value",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the check-verify pipeline
#[derive(Error, Debug)]
pub enum CheckVerifyError {
    #[error("Event body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode request body: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Provider response is not valid JSON: {0}")]
    MalformedProviderBody(#[source] serde_json::Error),
}

impl CheckVerifyError {
    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckVerifyError::Validation(_) => ErrorKind::Validation,
            CheckVerifyError::MalformedBody(_)
            | CheckVerifyError::Encoding(_)
            | CheckVerifyError::MalformedProviderBody(_) => ErrorKind::Value,
            CheckVerifyError::Secret(_) | CheckVerifyError::Provider(_) => ErrorKind::Unexpected,
        }
    }

    /// Status code reported for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Result alias for pipeline operations
pub type PipelineResult<T> = Result<T, CheckVerifyError>;
