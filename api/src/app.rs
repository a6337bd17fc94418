//! Application factory
//!
//! Builds the Actix-web application around a [`CheckVerifyService`].

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use cv_core::services::{SecretStore, VerificationProvider};

use crate::routes::{check_verify::check_verify, health::health_check, AppState};

/// Create and configure the application
///
/// Routes:
/// - `POST /` runs the check pipeline on the raw request body, capped at
///   [`AppState::max_payload_size`] bytes
/// - `GET /health` reports liveness
pub fn create_app<P, S>(
    app_state: web::Data<AppState<P, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + 'static,
    S: SecretStore + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/", web::post().to(check_verify::<P, S>))
        .route("/health", web::get().to(health_check))
        .default_service(web::route().to(not_found))
}

/// 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "statusCode": 404,
        "body": "Not Found"
    }))
}
