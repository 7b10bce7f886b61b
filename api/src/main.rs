use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use le_api::app::create_app;
use le_api::routes::auth::AppState;
use le_core::repositories::{
    InMemoryRefreshTokenStore, InMemoryTokenBlacklist, InMemoryUserRepository,
};
use le_core::services::session::SessionService;
use le_core::services::token::{TokenCodec, TokenCodecConfig};
use le_shared::config::{AuthConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting LegalEase API server");

    // Load configuration
    let auth_config = AuthConfig::from_env();
    if auth_config.is_using_default_secret() {
        warn!("JWT_SECRET is unset; using the development signing secret");
    }
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    // Construct the session subsystem: codec plus process-resident stores,
    // created once at startup and shared across workers
    let codec = TokenCodec::new(TokenCodecConfig::from(auth_config))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let users = Arc::new(InMemoryUserRepository::new());
    let refresh_tokens = Arc::new(InMemoryRefreshTokenStore::new());
    let blacklist = Arc::new(InMemoryTokenBlacklist::new());

    let session_service = Arc::new(SessionService::new(
        users,
        refresh_tokens,
        blacklist,
        Arc::new(codec),
    ));

    let app_state = web::Data::new(AppState { session_service });

    info!(%bind_address, "binding HTTP server");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
