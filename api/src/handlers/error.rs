//! Mapping of domain errors to HTTP responses

use actix_web::HttpResponse;

use le_core::errors::{AuthError, DomainError, TokenError};
use le_shared::types::ErrorBody;

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Every taxonomy variant maps to a distinct, stable error code so clients
/// can branch on it; nothing is silently swallowed.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    tracing::warn!(error = %error, "request failed");

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized()
                .json(ErrorBody::new("invalid_credentials", auth_error.to_string())),
            AuthError::EmailAlreadyExists => HttpResponse::Conflict()
                .json(ErrorBody::new("email_already_exists", auth_error.to_string())),
            AuthError::InvalidRole { .. } => HttpResponse::BadRequest()
                .json(ErrorBody::new("invalid_role", auth_error.to_string())),
            AuthError::UnknownSubject => HttpResponse::Unauthorized()
                .json(ErrorBody::new("unknown_subject", auth_error.to_string())),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::Expired => HttpResponse::Unauthorized()
                .json(ErrorBody::new("token_expired", token_error.to_string())),
            TokenError::InvalidSignature | TokenError::InvalidFormat => {
                HttpResponse::Unauthorized()
                    .json(ErrorBody::new("invalid_token", token_error.to_string()))
            }
            TokenError::InvalidRefreshToken => HttpResponse::Unauthorized().json(
                ErrorBody::new("invalid_refresh_token", token_error.to_string()),
            ),
            TokenError::Revoked => HttpResponse::Unauthorized()
                .json(ErrorBody::new("token_revoked", token_error.to_string())),
            TokenError::GenerationFailed | TokenError::WeakSecret { .. } => {
                HttpResponse::InternalServerError()
                    .json(ErrorBody::new("token_error", "Token processing failed"))
            }
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new("validation_error", message))
        }
        DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorBody::new("internal_error", "An internal error occurred")),
    }
}
