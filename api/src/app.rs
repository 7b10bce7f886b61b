//! Application factory
//!
//! Assembles the actix-web application from the shared state, the auth
//! routes and the middleware stack.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::auth::{AuthContext, JwtAuth};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, logout::logout, refresh::refresh, register::register, AppState};

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};
use le_core::services::session::Authenticator;

/// Create and configure the application with all dependencies
pub fn create_app<U, R, B>(
    app_state: web::Data<AppState<U, R, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RefreshTokenStore + 'static,
    B: TokenBlacklist + 'static,
{
    // The middleware only needs the object-safe authentication seam
    let authenticator: Arc<dyn Authenticator> = app_state.session_service.clone();

    App::new()
        .app_data(app_state.clone())
        .app_data(web::Data::new(authenticator))
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, R, B>))
                        .route("/login", web::post().to(login::<U, R, B>))
                        .route("/refresh", web::post().to(refresh::<U, R, B>))
                        .route("/logout", web::post().to(logout::<U, R, B>)),
                )
                // Protected probe: runs the full verify-then-blacklist check
                .route("/me", web::get().to(current_user).wrap(JwtAuth::new())),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "legalease-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Returns the authenticated principal behind the JWT middleware
async fn current_user(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "userId": auth.principal.subject,
        "role": auth.principal.role.to_string(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
