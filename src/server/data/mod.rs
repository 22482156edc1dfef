//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource. Repositories return SeaORM entity models; the service layer converts them to
//! domain models. Every write returns the stored row.

pub mod activity;
pub mod analysis;
pub mod document;
pub mod user;

#[cfg(test)]
mod test;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision every supported store keeps.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A timestamp strictly later than `previous`.
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous.trunc_subsecs(6) + chrono::Duration::microseconds(1)
    }
}
