use actix_web::HttpResponse;

use cv_shared::HealthResponse;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "check-verify",
        env!("CARGO_PKG_VERSION"),
    ))
}
