//! Wire-format DTOs shared by every HTTP endpoint.
//!
//! Field names are serialized in camelCase to match the JSON contract consumed by
//! the web client.

pub mod activity;
pub mod analysis;
pub mod api;
pub mod document;
pub mod health;
pub mod user;
