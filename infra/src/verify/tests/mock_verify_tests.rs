//! Unit tests for the mock provider

use cv_core::domain::{AuthHeaders, CheckVerifyResult};
use cv_core::services::{ProviderRequest, VerificationProvider};

use crate::verify::MockVerifyProvider;
use crate::ProviderError;

fn request(body: &str) -> ProviderRequest {
    ProviderRequest {
        endpoint: "https://verify.twilio.com/v2/Services/foo/VerificationCheck".to_string(),
        body: body.to_string(),
        headers: AuthHeaders::basic("sid", "token"),
    }
}

fn parse(body: &str) -> CheckVerifyResult {
    CheckVerifyResult::from_value(serde_json::from_str(body).unwrap()).unwrap()
}

#[tokio::test]
async fn test_approves_configured_code() {
    let provider = MockVerifyProvider::new();
    let body = provider
        .check_verification(request("To=%2B18605551234&Code=123456"))
        .await
        .unwrap();

    let result = parse(&body);
    assert_eq!(result.to, "+18605551234");
    assert_eq!(result.channel, "sms");
    assert_eq!(result.status, "approved");
    assert!(result.valid);
    assert_eq!(provider.get_request_count(), 1);
}

#[tokio::test]
async fn test_wrong_code_is_pending() {
    let provider = MockVerifyProvider::with_code("999999");
    let body = provider
        .check_verification(request("To=foo%40bar.com&Code=123456"))
        .await
        .unwrap();

    let result = parse(&body);
    assert_eq!(result.to, "foo@bar.com");
    assert_eq!(result.channel, "email");
    assert_eq!(result.status, "pending");
    assert!(!result.valid);
}

#[tokio::test]
async fn test_missing_parameter() {
    let provider = MockVerifyProvider::new();
    let err = provider
        .check_verification(request("To=%2B18605551234"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_simulated_failure() {
    let mut provider = MockVerifyProvider::new();
    provider.set_simulate_failure(true);

    let err = provider
        .check_verification(request("To=%2B18605551234&Code=123456"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connect(_)));
    assert_eq!(provider.get_request_count(), 1);
}

#[tokio::test]
async fn test_responses_are_stable() {
    let provider = MockVerifyProvider::new();
    let first = provider
        .check_verification(request("To=%2B18605551234&Code=123456"))
        .await
        .unwrap();
    let second = provider
        .check_verification(request("To=%2B18605551234&Code=123456"))
        .await
        .unwrap();
    assert_eq!(first, second);
}
