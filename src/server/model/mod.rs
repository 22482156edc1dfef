//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request payloads into the service layer.

pub mod activity;
pub mod analysis;
pub mod document;
pub mod user;
