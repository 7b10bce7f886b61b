use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};
use le_shared::types::ErrorBody;

use super::AppState;

/// Handler for POST /api/auth/login
///
/// Authenticates credentials and opens a new session. Each login creates
/// an independent refresh token, so multiple devices can stay signed in.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "secret"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failure
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U, R, B>(
    state: web::Data<AppState<U, R, B>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse::from(session)),
        Err(error) => handle_domain_error(&error),
    }
}
