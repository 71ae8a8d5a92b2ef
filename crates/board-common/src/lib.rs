//! # board-common
//!
//! Shared utilities including configuration, error handling, credential hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, is_password_hash, verify_password, CredentialMode, CredentialPolicy};
pub use config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, Environment, SnowflakeConfig, StorageBackend,
    StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
