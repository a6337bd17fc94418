//! Normalized verification check result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The subset of a Twilio VerificationCheck resource returned to callers
///
/// The provider sends more fields (`sid`, `service_sid`, `amount`, ...);
/// they are dropped here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVerifyResult {
    /// Recipient as the provider recorded it
    pub to: String,

    /// Delivery channel (`sms`, `email`, `call`, ...)
    pub channel: String,

    /// Verification status (`pending`, `approved`, `canceled`, ...)
    pub status: String,

    /// Whether the code matched
    pub valid: bool,

    pub date_created: DateTime<Utc>,

    pub date_updated: DateTime<Utc>,
}

impl CheckVerifyResult {
    /// Build a result from the provider's JSON response
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError::ProviderResponse)
    }
}
