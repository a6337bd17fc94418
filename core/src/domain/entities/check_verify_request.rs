//! Validated verification check request

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ValidationError;

/// A verification code check, as accepted from the caller
///
/// Both fields are required non-empty strings. `to` is either a phone
/// number (digits only, with or without the leading `+`) or an email
/// address; no format check is made beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CheckVerifyRequest {
    /// Phone number or email address the code was sent to
    #[serde(rename = "To")]
    #[validate(length(min = 1))]
    pub to: String,

    /// Code entered by the user
    #[serde(rename = "Code")]
    #[validate(length(min = 1))]
    pub code: String,
}

impl CheckVerifyRequest {
    /// Build a request from an untyped JSON value
    ///
    /// Fails when the value is not an object, when `To` or `Code` is
    /// missing or not a string, or when either is empty. Other keys are
    /// ignored.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::NotAnObject);
        }

        let request: Self =
            serde_json::from_value(value).map_err(ValidationError::RequestSchema)?;
        request.validate()?;
        Ok(request)
    }
}
