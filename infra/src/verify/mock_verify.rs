//! Mock verification provider
//!
//! Answers `VerificationCheck` requests in-process, approving one fixed
//! code. Used for local development and API tests.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use cv_core::services::{ProviderRequest, VerificationProvider};
use cv_shared::phone::mask_recipient;

use crate::ProviderError;

/// Code approved by default
pub const DEFAULT_APPROVED_CODE: &str = "123456";

/// Mock provider for development and testing
///
/// This implementation:
/// - Decodes the form body it receives
/// - Approves the configured code, reports anything else as pending
/// - Counts requests for assertions
/// - Can simulate a connection failure
#[derive(Clone)]
pub struct MockVerifyProvider {
    approved_code: String,
    created_at: DateTime<Utc>,
    request_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockVerifyProvider {
    /// Create a mock that approves [`DEFAULT_APPROVED_CODE`]
    pub fn new() -> Self {
        Self::with_code(DEFAULT_APPROVED_CODE)
    }

    /// Create a mock that approves `code`
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            approved_code: code.into(),
            created_at: Utc::now(),
            request_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }

    /// Get the number of requests received
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Default for MockVerifyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationProvider for MockVerifyProvider {
    async fn check_verification(&self, request: ProviderRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if self.simulate_failure {
            return Err(ProviderError::Connect(
                "Simulated connection failure".to_string(),
            ));
        }

        let form: HashMap<String, String> = serde_urlencoded::from_str(&request.body)
            .map_err(|e| ProviderError::Status {
                status: 400,
                message: format!("Invalid form body: {}", e),
            })?;
        let (Some(to), Some(code)) = (form.get("To"), form.get("Code")) else {
            return Err(ProviderError::Status {
                status: 400,
                message: "Missing required parameter To or Code".to_string(),
            });
        };

        let valid = *code == self.approved_code;
        let channel = if to.contains('@') { "email" } else { "sms" };
        let timestamp = self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true);

        info!(
            recipient = %mask_recipient(to),
            valid,
            "[MOCK VERIFY] VerificationCheck received"
        );

        Ok(serde_json::json!({
            "sid": "VE00000000000000000000000000000000",
            "to": to,
            "channel": channel,
            "status": if valid { "approved" } else { "pending" },
            "valid": valid,
            "date_created": timestamp,
            "date_updated": timestamp,
        })
        .to_string())
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
