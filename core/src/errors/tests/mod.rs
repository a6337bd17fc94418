//! Unit tests for the error taxonomy

use std::path::PathBuf;

use crate::errors::{CheckVerifyError, ErrorKind, ProviderError, SecretError, ValidationError};

fn json_syntax_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{\"To\":").unwrap_err()
}

#[test]
fn test_kind_status_codes() {
    assert_eq!(ErrorKind::Validation.status_code(), 400);
    assert_eq!(ErrorKind::Value.status_code(), 400);
    assert_eq!(ErrorKind::Unexpected.status_code(), 500);
    assert_eq!(ErrorKind::Unexpected.to_string(), "unexpected");
}

#[test]
fn test_validation_errors_are_validation_kind() {
    let error: CheckVerifyError = ValidationError::NotAnObject.into();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.status_code(), 400);
    assert_eq!(error.to_string(), "Request body must be a JSON object");
}

#[test]
fn test_parse_failures_are_value_kind() {
    let body = CheckVerifyError::MalformedBody(json_syntax_error());
    assert_eq!(body.kind(), ErrorKind::Value);

    let provider_body = CheckVerifyError::MalformedProviderBody(json_syntax_error());
    assert_eq!(provider_body.kind(), ErrorKind::Value);

    let encoding: CheckVerifyError = serde_urlencoded::to_string(42).unwrap_err().into();
    assert_eq!(encoding.kind(), ErrorKind::Value);
}

#[test]
fn test_secret_errors_are_unexpected() {
    let error: CheckVerifyError = SecretError::Read {
        path: PathBuf::from("/var/openfaas/secrets/twilio-auth-token"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    }
    .into();

    assert_eq!(error.kind(), ErrorKind::Unexpected);
    assert_eq!(error.status_code(), 500);
    let message = error.to_string();
    assert!(message.contains("/var/openfaas/secrets/twilio-auth-token"));
    assert!(message.contains("no such file"));
}

#[test]
fn test_provider_errors_are_unexpected() {
    let errors = vec![
        ProviderError::Status {
            status: 404,
            message: "The requested resource was not found".to_string(),
        },
        ProviderError::Timeout("deadline elapsed".to_string()),
        ProviderError::Connect("connection refused".to_string()),
        ProviderError::Transport("broken pipe".to_string()),
    ];

    for provider_error in errors {
        let error: CheckVerifyError = provider_error.into();
        assert_eq!(error.kind(), ErrorKind::Unexpected);
    }
}

#[test]
fn test_provider_status_accessor() {
    let status = ProviderError::Status {
        status: 429,
        message: "Too many requests".to_string(),
    };
    assert_eq!(status.status(), Some(429));
    assert_eq!(ProviderError::Connect("refused".to_string()).status(), None);
}
