//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header and runs the
//! session subsystem's two-step check (signature/expiry verification, then
//! the revocation blacklist) before the request reaches a handler. The
//! resulting [`AuthContext`] is injected into request extensions.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ErrorUnauthorized;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use le_core::domain::entities::user::Principal;
use le_core::services::session::Authenticator;

/// Authentication context injected into requests that pass the check
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Principal the access token was minted for
    pub principal: Principal,
    /// The raw bearer token, available for explicit revocation
    pub token: String,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("authentication context missing")),
        )
    }
}

/// JWT authentication middleware factory
///
/// The actual check is delegated to the [`Authenticator`] trait object
/// registered in app data, so the middleware stays free of the session
/// service's generics.
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match bearer_token(req.headers()) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized(
                        "Missing or invalid Authorization header",
                    ));
                }
            };

            let authenticator = match req.app_data::<web::Data<Arc<dyn Authenticator>>>() {
                Some(authenticator) => authenticator.clone(),
                None => return Err(ErrorUnauthorized("Authentication is not configured")),
            };

            // Signature/expiry first, then blacklist; both are mandatory
            let principal = authenticator
                .authenticate(&token)
                .await
                .map_err(|e| ErrorUnauthorized(e.to_string()))?;

            req.extensions_mut().insert(AuthContext { principal, token });

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from an Authorization header, if present
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
