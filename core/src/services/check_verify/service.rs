//! Check verify service implementation

use std::sync::Arc;

use tracing::{debug, error, info, info_span, Instrument, Span};

use cv_shared::{CheckVerifySettings, FunctionResponse};

use super::auth_header::build_auth_headers;
use super::request_builder::build_request_body;
use super::traits::{ProviderRequest, SecretStore, VerificationProvider};
use crate::domain::{CheckVerifyRequest, CheckVerifyResult, FunctionEvent, Recipient};
use crate::errors::{CheckVerifyError, ErrorKind, PipelineResult};

/// Service that checks a verification code with the provider
///
/// Holds no per-request state: the settings are read-only and secrets are
/// re-read on every call, so identical events against an identical provider
/// produce identical responses.
pub struct CheckVerifyService<P: VerificationProvider, S: SecretStore> {
    /// Provider integration
    provider: Arc<P>,
    /// Secret reader for the auth header
    secrets: Arc<S>,
    /// Endpoint and secret locations
    settings: Arc<CheckVerifySettings>,
    /// Span every invocation runs in
    span: Span,
}

impl<P: VerificationProvider, S: SecretStore> CheckVerifyService<P, S> {
    /// Create a new check verify service
    ///
    /// # Arguments
    ///
    /// * `provider` - Verification provider implementation
    /// * `secrets` - Secret store used to build the auth header
    /// * `settings` - Provider settings, loaded once per process
    pub fn new(provider: Arc<P>, secrets: Arc<S>, settings: Arc<CheckVerifySettings>) -> Self {
        let span = info_span!("check_verify", provider = provider.provider_name());
        Self {
            provider,
            secrets,
            settings,
            span,
        }
    }

    /// Replace the span invocations are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Handle one function event
    ///
    /// Never fails: every pipeline error is logged and mapped to a 400 or
    /// 500 response.
    pub async fn handle(&self, event: &FunctionEvent) -> FunctionResponse<CheckVerifyResult> {
        let outcome = self.check(&event.body).instrument(self.span.clone()).await;
        self.span.in_scope(|| into_response(outcome))
    }

    /// Run the check pipeline on a raw event body
    ///
    /// Parse JSON, validate, build the form body, build the auth headers,
    /// call the provider, validate its response. The first failing step
    /// ends the pipeline.
    pub async fn check(&self, body: &str) -> PipelineResult<CheckVerifyResult> {
        debug!("Handling verification check");

        let value: serde_json::Value =
            serde_json::from_str(body).map_err(CheckVerifyError::MalformedBody)?;
        let request = CheckVerifyRequest::from_value(value)?;

        let recipient = Recipient::parse(&request.to);
        debug!(recipient = %recipient, channel = recipient.kind(), "Request validated");

        let form = build_request_body(&request)?;
        let headers = build_auth_headers(self.secrets.as_ref(), &self.settings).await?;

        let response = self
            .provider
            .check_verification(ProviderRequest {
                endpoint: self.settings.twilio_check_verify_endpoint.clone(),
                body: form,
                headers,
            })
            .await?;

        let value: serde_json::Value = serde_json::from_str(&response)
            .map_err(CheckVerifyError::MalformedProviderBody)?;
        let result = CheckVerifyResult::from_value(value)?;

        info!(
            recipient = %recipient,
            status = %result.status,
            valid = result.valid,
            "Verification check completed"
        );
        Ok(result)
    }
}

fn into_response(outcome: PipelineResult<CheckVerifyResult>) -> FunctionResponse<CheckVerifyResult> {
    match outcome {
        Ok(result) => FunctionResponse::ok(result),
        Err(err) => {
            let kind = err.kind();
            error!(
                kind = %kind,
                status_code = kind.status_code(),
                error = %err,
                details = ?err,
                "Verification check failed"
            );

            match kind {
                ErrorKind::Validation | ErrorKind::Value => FunctionResponse::bad_request(),
                ErrorKind::Unexpected => FunctionResponse::internal_server_error(),
            }
        }
    }
}
