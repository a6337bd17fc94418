use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use cv_api::{create_app, telemetry, AppState};
use cv_core::services::CheckVerifyService;
use cv_infra::{FileSecretStore, TwilioVerifyProvider};
use cv_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Per-environment file first; dotenvy never overrides a variable already set
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    telemetry::init_tracing(&config.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize tracing")?;

    info!(environment = %config.environment, "Starting check-verify function");

    let settings = Arc::new(config.check_verify);
    let provider = Arc::new(
        TwilioVerifyProvider::from_settings(&settings)
            .context("failed to create Twilio Verify client")?,
    );
    let secrets = Arc::new(FileSecretStore::new());
    let service = Arc::new(CheckVerifyService::new(provider, secrets, settings));
    let app_state = web::Data::new(AppState::new(service, config.server.max_payload_size));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")
}
