//! Verification provider module
//!
//! - **Twilio Verify**: production `VerificationCheck` calls over HTTPS
//! - **Mock**: in-process provider for development and tests
//! - **Error parsing**: Twilio's JSON error bodies, for logging

mod error;
mod mock_verify;
mod twilio_verify;

#[cfg(test)]
mod tests;

pub use error::TwilioApiError;
pub use mock_verify::MockVerifyProvider;
pub use twilio_verify::TwilioVerifyProvider;
