//! Shared glue for the stays Lambda functions.
//!
//! Configuration, tracing setup and HTTP response helpers. Nothing here
//! touches the interval engine in the `stays` crate.

pub mod config;
pub mod http;
pub mod telemetry;

pub use config::{Config, ConfigError, LogFormat};
pub use http::{error_response, json_response, ApiResponse};
