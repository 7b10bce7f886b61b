use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::{LogoutRequest, LogoutResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::bearer_token;

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};

use super::AppState;

/// Handler for POST /api/auth/logout
///
/// Best-effort session teardown: revokes the refresh token from the body
/// (if any) and blacklists the access token from the Authorization header
/// (if any). Always reports success to the caller; presenting an unknown
/// refresh token is not an error.
///
/// # Request Body (optional)
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
///     "message": "logged out"
/// }
/// ```
pub async fn logout<U, R, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, B>>,
    body: Option<web::Json<LogoutRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenStore + 'static,
    B: TokenBlacklist + 'static,
{
    let refresh_token = body.as_ref().and_then(|b| b.refresh_token.clone());
    let access_token = bearer_token(req.headers());

    match state
        .session_service
        .logout(refresh_token.as_deref(), access_token.as_deref())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "logged out".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
