//! Unit tests for the Twilio Verify provider

use std::time::Duration;

use cv_core::domain::AuthHeaders;
use cv_core::services::{ProviderRequest, VerificationProvider};

use super::log_capture::CapturedLogs;
use super::stub_server::{serve_once, serve_silence};
use crate::verify::TwilioVerifyProvider;
use crate::ProviderError;

const APPROVED: &str = r#"{"sid":"VE123","to":"+18605551234","channel":"sms","status":"approved","valid":true,"date_created":"2021-01-01T00:00:00Z","date_updated":"2021-01-01T00:00:01Z"}"#;

fn provider() -> TwilioVerifyProvider {
    TwilioVerifyProvider::new(Duration::from_secs(5)).unwrap()
}

fn request(endpoint: String) -> ProviderRequest {
    ProviderRequest {
        endpoint,
        body: "To=%2B18605551234&Code=123456".to_string(),
        headers: AuthHeaders::basic("sid", "token"),
    }
}

#[tokio::test]
async fn test_success_returns_body() {
    let (url, server) = serve_once("200 OK", APPROVED).await;

    let body = provider().check_verification(request(url)).await.unwrap();
    assert_eq!(body, APPROVED);

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /v2/Services/VA123/VerificationCheck HTTP/1.1"));
    let lower = raw.to_lowercase();
    assert!(lower.contains("authorization: basic c2lkonrva2vu"));
    assert!(lower.contains("content-type: application/x-www-form-urlencoded"));
    assert!(raw.ends_with("To=%2B18605551234&Code=123456"));
}

#[tokio::test]
async fn test_error_status_with_twilio_body() {
    let body = r#"{"code":20404,"message":"The requested resource /Services/VA123/VerificationCheck was not found","more_info":"https://www.twilio.com/docs/errors/20404","status":404}"#;
    let (url, _server) = serve_once("404 Not Found", body).await;

    let err = provider().check_verification(request(url)).await.unwrap_err();
    match err {
        ProviderError::Status { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("20404"));
            assert!(message.contains("was not found"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_without_json_body() {
    let (url, _server) = serve_once("503 Service Unavailable", "upstream down").await;

    let err = provider().check_verification(request(url)).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Service Unavailable"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider()
        .check_verification(request(format!("http://{}/", addr)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connect(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_timeout() {
    let (url, _server) = serve_silence().await;
    let provider = TwilioVerifyProvider::new(Duration::from_millis(200)).unwrap();

    let err = provider.check_verification(request(url)).await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_transport_failure_logged_below_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let err = provider()
        .check_verification(request(format!("http://{}/", addr)))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connect(_)));

    // The service boundary writes the single error-level record
    let output = logs.contents();
    assert!(output.contains("Could not connect to Twilio"), "{}", output);
    assert!(output.contains("WARN"), "{}", output);
    assert!(!output.contains("ERROR"), "{}", output);
}

#[tokio::test]
async fn test_twilio_error_details_logged() {
    let body = r#"{"code":20404,"message":"Not found","more_info":"https://www.twilio.com/docs/errors/20404","status":404}"#;
    let (url, _server) = serve_once("404 Not Found", body).await;

    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let err = provider().check_verification(request(url)).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let output = logs.contents();
    assert!(output.contains("twilio_code=20404"), "{}", output);
    assert!(output.contains("https://www.twilio.com/docs/errors/20404"), "{}", output);
    assert!(!output.contains("ERROR"), "{}", output);
}

#[test]
fn test_provider_name() {
    assert_eq!(provider().provider_name(), "Twilio");
}
