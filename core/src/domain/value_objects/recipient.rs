//! Recipient of a verification code

use std::fmt;

use cv_shared::phone::{is_numeric_recipient, mask_recipient, with_plus_prefix};

/// Where a verification code was delivered
///
/// A value made only of numeric characters is a phone number and is sent
/// to the provider as `+<digits>`. Anything else, including values that
/// already start with `+`, passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Bare phone number, digits only
    Phone(String),
    /// Email address or any other non-numeric value
    Email(String),
}

impl Recipient {
    /// Classify a raw `to` value
    pub fn parse(to: &str) -> Self {
        if is_numeric_recipient(to) {
            Recipient::Phone(to.to_string())
        } else {
            Recipient::Email(to.to_string())
        }
    }

    /// Value sent to the provider in the `To` field
    pub fn provider_value(&self) -> String {
        match self {
            Recipient::Phone(digits) => with_plus_prefix(digits),
            Recipient::Email(address) => address.clone(),
        }
    }

    /// Channel label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Recipient::Phone(_) => "phone",
            Recipient::Email(_) => "email",
        }
    }

    /// Masked form safe for logs
    pub fn masked(&self) -> String {
        mask_recipient(&self.provider_value())
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
