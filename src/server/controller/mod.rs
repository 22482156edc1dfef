//! HTTP request handlers.
//!
//! Controllers validate the body, parse path and query parameters, call the matching
//! service and wrap the result in the success envelope. They hold no business logic.

pub mod activity;
pub mod analysis;
pub mod document;
pub mod fallback;
pub mod health;
pub mod param;
pub mod response;
pub mod user;
