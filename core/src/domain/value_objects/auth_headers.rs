//! Authorization headers for the provider call

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Content type of the outbound request body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Headers sent with every VerificationCheck request
///
/// Built per call from the account SID and auth token; never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `Basic <base64(sid:token)>`
    pub authorization: String,
    pub content_type: String,
}

impl AuthHeaders {
    /// Create HTTP basic auth headers for a form-encoded request
    pub fn basic(account_sid: &str, auth_token: &str) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", account_sid, auth_token));
        Self {
            authorization: format!("Basic {}", credentials),
            content_type: FORM_CONTENT_TYPE.to_string(),
        }
    }

    /// Header name/value pairs, lower-case names
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("authorization", self.authorization.as_str()),
            ("content-type", self.content_type.as_str()),
        ]
    }
}

// Credentials stay out of logs
impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("authorization", &"Basic ***")
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let headers = AuthHeaders::basic("sid", "token");
        assert_eq!(headers.authorization, "Basic c2lkOnRva2Vu");
        assert_eq!(headers.content_type, FORM_CONTENT_TYPE);
    }

    #[test]
    fn test_pairs() {
        let headers = AuthHeaders::basic("sid", "token");
        assert_eq!(
            headers.pairs(),
            [
                ("authorization", "Basic c2lkOnRva2Vu"),
                ("content-type", "application/x-www-form-urlencoded"),
            ]
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let headers = AuthHeaders::basic("sid", "token");
        let debug = format!("{:?}", headers);
        assert!(!debug.contains("c2lkOnRva2Vu"));
        assert!(debug.contains("Basic ***"));
    }
}
