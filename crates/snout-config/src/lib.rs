//! Snout Registry Configuration Management
//!
//! Configuration loading and validation for the registry service: TOML/JSON
//! files, `SNOUT_*` environment overrides and per-profile defaults.

pub mod config;
pub mod error;
pub mod loader;

// Re-exports for convenience
pub use config::{LogFormat, LoggingConfig, NodeConfig, RegistryConfig, RpcConfig, SnoutConfig};
pub use config::snout::Profile;
pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, EnvLoader, FileLoader};
