//! Business services containing the check pipeline.

pub mod check_verify;

// Re-export commonly used types
pub use check_verify::{
    build_auth_headers, build_request_body, parse_secret, CheckVerifyService, ProviderRequest,
    SecretStore, VerificationProvider,
};
