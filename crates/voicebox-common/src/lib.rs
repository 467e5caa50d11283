//! # voicebox-common
//!
//! Shared utilities: configuration loading, the application error type, and
//! tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, RateLimitConfig, RedisConfig,
    ServerConfig, StoreBackend, StoreConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, try_init_tracing_with_config, TracingConfig};
