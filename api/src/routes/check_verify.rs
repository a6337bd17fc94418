use actix_web::{http::StatusCode, web, HttpResponse};
use futures_util::StreamExt;
use tracing::warn;

use cv_core::domain::{CheckVerifyResult, FunctionEvent};
use cv_core::services::{SecretStore, VerificationProvider};
use cv_shared::FunctionResponse;

use super::AppState;

/// Handler for POST /
///
/// Checks a verification code with the provider. The raw request body is
/// the event body.
///
/// # Request Body
///
/// ```json
/// {
///     "To": "18605551234",
///     "Code": "123456"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": 200,
///     "body": {
///         "to": "+18605551234",
///         "channel": "sms",
///         "status": "approved",
///         "valid": true,
///         "date_created": "2021-01-01T00:00:00Z",
///         "date_updated": "2021-01-01T00:00:01Z"
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 `{"statusCode": 400, "body": "Bad Request"}`: malformed or
///   oversized body, missing or empty fields, or an unusable provider
///   response
/// - 500 `{"statusCode": 500, "body": "Internal Server Error"}`: secrets
///   unreadable, provider error status, or network failure
pub async fn check_verify<P, S>(
    state: web::Data<AppState<P, S>>,
    payload: web::Payload,
) -> HttpResponse
where
    P: VerificationProvider + 'static,
    S: SecretStore + 'static,
{
    let body = match read_body(payload, state.max_payload_size).await {
        Ok(body) => body,
        Err(response) => return respond(response),
    };

    let response = match String::from_utf8(body.to_vec()) {
        Ok(body) => {
            state
                .check_verify_service
                .handle(&FunctionEvent::new(body))
                .await
        }
        Err(e) => {
            warn!(error = %e, "Request body is not UTF-8");
            FunctionResponse::<CheckVerifyResult>::bad_request()
        }
    };

    respond(response)
}

/// Collect the request body, refusing anything over `limit` bytes
async fn read_body(
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, FunctionResponse<CheckVerifyResult>> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "Failed to read request body");
            FunctionResponse::bad_request()
        })?;
        if body.len() + chunk.len() > limit {
            warn!(limit, "Request body exceeds size limit");
            return Err(FunctionResponse::bad_request());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn respond(response: FunctionResponse<CheckVerifyResult>) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(response)
}
