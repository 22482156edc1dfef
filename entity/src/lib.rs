//! SeaORM entities for the VentureLens relational store.

pub mod prelude;

pub mod activity;
pub mod analysis;
pub mod document;
pub mod user;
