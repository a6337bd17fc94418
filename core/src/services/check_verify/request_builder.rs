//! Outbound request body construction

use serde::Serialize;

use crate::domain::{CheckVerifyRequest, Recipient};

#[derive(Serialize)]
struct VerificationCheckForm<'a> {
    #[serde(rename = "To")]
    to: &'a str,
    #[serde(rename = "Code")]
    code: &'a str,
}

/// Build the form-encoded VerificationCheck body
///
/// Produces exactly `To=<to>&Code=<code>`, in that order, with standard
/// form encoding. A fully numeric `to` is sent as `+<digits>`.
pub fn build_request_body(
    request: &CheckVerifyRequest,
) -> Result<String, serde_urlencoded::ser::Error> {
    let to = Recipient::parse(&request.to).provider_value();
    serde_urlencoded::to_string(VerificationCheckForm {
        to: &to,
        code: &request.code,
    })
}
