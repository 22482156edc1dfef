//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the gateway and the limiters share
//! their internals through `Arc`.

use std::sync::Arc;

use crate::server::{
    config::Config, database::DatabaseGateway, middleware::rate_limit::RateLimits,
};

#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway handing out pooled connections.
    pub gateway: DatabaseGateway,

    pub config: Arc<Config>,

    /// Per-router request limiters, also swept by the scheduler.
    pub rate_limits: RateLimits,
}

impl AppState {
    /// Creates the state, deriving the rate limiters from configuration.
    pub fn new(gateway: DatabaseGateway, config: Config) -> Self {
        let rate_limits = RateLimits::from_config(&config);

        Self {
            gateway,
            config: Arc::new(config),
            rate_limits,
        }
    }
}
