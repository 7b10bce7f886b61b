use actix_web::{web, HttpResponse};

use crate::dto::auth::{RefreshRequest, RefreshResponse};
use crate::handlers::error::handle_domain_error;

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};

use super::AppState;

/// Handler for POST /api/auth/refresh
///
/// Exchanges a refresh token for a new access token. The refresh token is
/// not rotated and stays valid until an explicit logout.
///
/// # Request Body
///
/// ```json
/// {
///     "refreshToken": "opaque_token"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing refreshToken field
/// - 401 Unauthorized: Unknown refresh token, or subject no longer exists
pub async fn refresh<U, R, B>(
    state: web::Data<AppState<U, R, B>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenStore + 'static,
    B: TokenBlacklist + 'static,
{
    match state.session_service.refresh(&request.refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(&error),
    }
}
