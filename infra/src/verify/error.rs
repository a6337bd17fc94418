//! Twilio error response types

use serde::Deserialize;

/// Error body returned by Twilio with a non-2xx status
///
/// See <https://www.twilio.com/docs/api/errors> for the code catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioApiError {
    /// Twilio error code, e.g. 20404
    pub code: u32,
    /// Error message
    pub message: String,
    /// More info URL
    #[serde(default)]
    pub more_info: Option<String>,
    /// HTTP status code
    #[serde(default)]
    pub status: Option<u16>,
}

impl TwilioApiError {
    /// Parse an error body, if it is one
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Verification resource not found. Twilio also answers this once a
    /// verification expired, was approved, or hit its attempt limit.
    pub fn is_not_found(&self) -> bool {
        self.code == 20404
    }

    pub fn is_rate_limited(&self) -> bool {
        self.code == 20429
    }
}

impl std::fmt::Display for TwilioApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Twilio error {})", self.message, self.code)
    }
}
