//! # catalog-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, AppSettings, ConfigError, Environment, LogSettings};
pub use telemetry::{
    init_tracing_from_config, try_init_tracing, try_init_tracing_with_config, TracingConfig,
    TracingError,
};
