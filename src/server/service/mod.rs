//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! convert entity models into domain models, turn missing rows into `NotFound`, map
//! unique-constraint violations to `Conflict`, and log every operation on entry and on
//! failure. Errors are re-raised unchanged; no service retries.

pub mod activity;
pub mod analysis;
pub mod document;
pub mod user;
