//! HTTP API backend.
//!
//! The server is a layered CRUD pipeline over four resources (users, documents,
//! analyses and activities) built on Axum and SeaORM.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, parameter parsing and envelopes
//! - **Schema Layer** (`schema/`) - Record definitions and request body validation
//! - **Service Layer** (`service/`) - Not-found and conflict handling, logging
//! - **Data Layer** (`data/`) - Database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Rate limiting, request logging, security headers,
//!   CORS and error detail
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Database** (`database`) - Connection gateway with migrations on connect
//! - **State** (`state`) - Shared application state
//! - **Router** (`router`) - Route table and middleware stack
//! - **Docs** (`docs`) - Generated OpenAPI document
//! - **Scheduler** (`scheduler/`) - Cron jobs (rate limit sweep)
//! - **Startup** (`startup`) - Tracing, serving and graceful shutdown
//!
//! # Request Flow
//!
//! 1. **Middleware** adds security headers, handles CORS, limits the body, logs
//! 2. **Router** matches the route; the resource's rate limiter counts the request
//! 3. **Controller** validates the body, parses parameters, calls the service
//! 4. **Service** calls the repository and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs inside the success envelope
//! 6. **Error Layer** turns any failure into the error envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod database;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
