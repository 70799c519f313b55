//! REST adapter over the unitconv conversion engine.
//!
//! The gateway is a thin layer: it parses requests, calls the
//! dispatcher, and maps typed failures onto HTTP statuses. All
//! conversion semantics live in the engine and below.

pub mod config;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use metrics::{Metrics, SharedMetrics};
pub use state::AppState;
