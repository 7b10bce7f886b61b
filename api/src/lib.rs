//! LegalEase HTTP API
//!
//! Thin actix-web layer over the `le_core` session subsystem: request
//! DTOs, the auth route handlers, JWT authentication middleware and the
//! domain-error to HTTP mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
