//! Shared domain types and application configuration for Pulse.
//!
//! Holds the record types the analytics engine consumes ([`Post`],
//! [`DailyMetric`]) and the env-driven [`AppConfig`] used by the server and
//! CLI binaries. Nothing in this crate performs I/O beyond reading the
//! process environment at startup.

pub mod app_config;
pub mod metrics;
pub mod posts;

mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use metrics::DailyMetric;
pub use posts::Post;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
