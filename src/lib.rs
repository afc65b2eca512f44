//! Demonstration HTTP service for the Compass UOL CI/CD pipeline.
//!
//! The service exists to be built, containerized, deployed and health-probed.
//! It answers three stateless GET routes with JSON:
//!
//! ```text
//! GET /         environment info: company, message, local time, hostname, version, stack
//! GET /healthz  {"status": "ok"} for liveness/readiness probes
//! GET /info     project information
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`host`]: Local time and hostname lookup
//! - [`api`]: HTTP handlers, routes and OpenAPI document
//! - [`metrics`]: Prometheus request metrics
//! - [`server`]: Listener binding and graceful shutdown
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
