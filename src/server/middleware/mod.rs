//! Cross-cutting HTTP middleware.
//!
//! Every layer here is a plain `axum::middleware::from_fn` function or a configured
//! `tower-http` layer; the router decides the order they wrap the application in.

pub mod cors;
pub mod error;
pub mod rate_limit;
pub mod request_log;
pub mod security;
