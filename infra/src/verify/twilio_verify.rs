//! Twilio Verify client
//!
//! Sends `VerificationCheck` requests to the configured endpoint. The
//! request body and headers arrive fully built from the core service; this
//! module only moves bytes and classifies failures. There is no retry: a
//! failed call is reported to the caller once.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use cv_core::services::{ProviderRequest, VerificationProvider};
use cv_shared::CheckVerifySettings;

use super::error::TwilioApiError;
use crate::{InfrastructureError, ProviderError};

/// Twilio Verify `VerificationCheck` provider
#[derive(Debug, Clone)]
pub struct TwilioVerifyProvider {
    client: Client,
}

impl TwilioVerifyProvider {
    /// Create a provider whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Create a provider from the loaded settings
    pub fn from_settings(settings: &CheckVerifySettings) -> Result<Self, InfrastructureError> {
        Self::new(Duration::from_secs(settings.twilio_request_timeout_secs))
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyProvider {
    async fn check_verification(&self, request: ProviderRequest) -> Result<String, ProviderError> {
        debug!(endpoint = %request.endpoint, "Sending VerificationCheck request");

        let mut builder = self.client.post(&request.endpoint);
        for (name, value) in request.headers.pairs() {
            builder = builder.header(name, value);
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let message = match TwilioApiError::parse(&text) {
                Some(api_error) => {
                    if api_error.is_not_found() {
                        warn!("Verification not found, it may have expired or already been used");
                    } else if api_error.is_rate_limited() {
                        warn!("Twilio rate limit reached");
                    }
                    warn!(
                        status = status.as_u16(),
                        twilio_code = api_error.code,
                        twilio_status = ?api_error.status,
                        more_info = api_error.more_info.as_deref().unwrap_or("-"),
                        "Twilio rejected VerificationCheck"
                    );
                    api_error.to_string()
                }
                None => {
                    warn!(status = status.as_u16(), "Twilio rejected VerificationCheck");
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown status")
                        .to_string()
                }
            };

            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

/// Map a reqwest failure onto the provider error taxonomy
fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        warn!(error = %err, "Twilio request timed out");
        ProviderError::Timeout(err.to_string())
    } else if err.is_connect() {
        warn!(error = %err, "Could not connect to Twilio");
        ProviderError::Connect(err.to_string())
    } else {
        warn!(error = %err, "Twilio request failed");
        ProviderError::Transport(err.to_string())
    }
}
