//! Function response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned with a 400 response
pub const BAD_REQUEST_BODY: &str = "Bad Request";

/// Body returned with a 500 response
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

/// Response returned by a function handler
///
/// The two variants carry their status under different keys: a success
/// serializes as `{"status": 200, "body": ...}` while a failure serializes
/// as `{"statusCode": 400, "body": "Bad Request"}`. Callers already depend
/// on both keys, so the shape is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionResponse<T> {
    /// Successful result
    Success {
        /// HTTP-style status code
        status: u16,
        /// Normalized result
        body: T,
    },
    /// Generic failure
    Failure {
        /// HTTP-style status code
        #[serde(rename = "statusCode")]
        status_code: u16,
        /// Short reason phrase
        body: String,
    },
}

impl<T> FunctionResponse<T> {
    /// Create a 200 response
    pub fn ok(body: T) -> Self {
        Self::Success { status: 200, body }
    }

    /// Create a 400 response
    pub fn bad_request() -> Self {
        Self::Failure {
            status_code: 400,
            body: BAD_REQUEST_BODY.to_string(),
        }
    }

    /// Create a 500 response
    pub fn internal_server_error() -> Self {
        Self::Failure {
            status_code: 500,
            body: INTERNAL_SERVER_ERROR_BODY.to_string(),
        }
    }

    /// Status code of either variant
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { status, .. } => *status,
            Self::Failure { status_code, .. } => *status_code,
        }
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response for a service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_uses_status_key() {
        let response = FunctionResponse::ok(json!({"valid": true}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({"status": 200, "body": {"valid": true}}));
        assert_eq!(response.status_code(), 200);
    }

    #[test]
    fn test_failures_use_status_code_key() {
        let bad = FunctionResponse::<()>::bad_request();
        assert_eq!(
            serde_json::to_value(&bad).unwrap(),
            json!({"statusCode": 400, "body": "Bad Request"})
        );

        let internal = FunctionResponse::<()>::internal_server_error();
        assert_eq!(
            serde_json::to_value(&internal).unwrap(),
            json!({"statusCode": 500, "body": "Internal Server Error"})
        );
        assert_eq!(bad.status_code(), 400);
        assert_eq!(internal.status_code(), 500);
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy("check-verify", "0.1.0");
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["service"], "check-verify");
    }
}
