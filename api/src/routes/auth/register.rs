use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, RegisterRequest};
use crate::handlers::error::handle_domain_error;

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};
use le_shared::types::ErrorBody;

use super::AppState;

/// Handler for POST /api/auth/register
///
/// Creates a new account and opens its first session.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice Attorney",
///     "email": "alice@example.com",
///     "password": "at-least-8-chars",
///     "role": "CLIENT"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "opaque_token",
///     "userId": "uuid",
///     "email": "alice@example.com",
///     "name": "Alice Attorney",
///     "role": "CLIENT"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failure or unrecognized role
/// - 409 Conflict: Email already registered
pub async fn register<U, R, B>(
    state: web::Data<AppState<U, R, B>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenStore + 'static,
    B: TokenBlacklist + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorBody::new("validation_error", errors.to_string()));
    }

    match state
        .session_service
        .register(&request.name, &request.email, &request.password, &request.role)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse::from(session)),
        Err(error) => handle_domain_error(&error),
    }
}
