use crate::config::snout::Profile;
use crate::{ConfigError, ConfigResult, LogFormat, SnoutConfig};
use std::env;
use std::str::FromStr;

/// Environment variable-based configuration loader
///
/// All variables use the `SNOUT_` prefix. Values set in the environment win
/// over file values and defaults.
pub struct EnvLoader;

impl EnvLoader {
    /// Load configuration from environment variables only
    pub fn load_from_env() -> ConfigResult<SnoutConfig> {
        let profile = Self::get_profile()?;
        let mut config = SnoutConfig::new_for_profile(profile);
        Self::apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the deployment profile from `SNOUT_PROFILE`, defaulting to dev
    pub fn get_profile() -> ConfigResult<Profile> {
        match env::var("SNOUT_PROFILE") {
            Ok(raw) => Profile::from_str(&raw)
                .map_err(|e| ConfigError::EnvironmentError(format!("Invalid SNOUT_PROFILE: {}", e))),
            Err(_) => Ok(Profile::Dev),
        }
    }

    /// Apply all `SNOUT_*` overrides to an existing configuration
    ///
    /// Validation is the caller's responsibility, so overrides can be layered
    /// on top of a partially built configuration.
    pub fn apply_overrides(config: &mut SnoutConfig) -> ConfigResult<()> {
        Self::apply_node_overrides(config)?;
        Self::apply_registry_overrides(config)?;
        Self::apply_rpc_overrides(config)?;
        Self::apply_logging_overrides(config)?;
        Ok(())
    }

    fn apply_node_overrides(config: &mut SnoutConfig) -> ConfigResult<()> {
        if let Ok(id) = env::var("SNOUT_NODE_ID") {
            config.node.id = id;
        }

        if let Ok(dir) = env::var("SNOUT_NODE_DATA_DIR") {
            config.node.data_dir = dir.into();
        }

        Ok(())
    }

    fn apply_registry_overrides(config: &mut SnoutConfig) -> ConfigResult<()> {
        if let Ok(authority) = env::var("SNOUT_REGISTRY_AUTHORITY") {
            config.registry.authority = authority;
        }

        if let Ok(max_bytes) = env::var("SNOUT_REGISTRY_MAX_RECORD_BYTES") {
            config.registry.max_record_bytes = max_bytes.parse().map_err(|_| {
                ConfigError::EnvironmentError("Invalid SNOUT_REGISTRY_MAX_RECORD_BYTES".to_string())
            })?;
        }

        Ok(())
    }

    fn apply_rpc_overrides(config: &mut SnoutConfig) -> ConfigResult<()> {
        if let Ok(enabled) = env::var("SNOUT_RPC_ENABLED") {
            config.rpc.enabled = enabled
                .parse()
                .map_err(|_| ConfigError::EnvironmentError("Invalid SNOUT_RPC_ENABLED".to_string()))?;
        }

        if let Ok(address) = env::var("SNOUT_RPC_BIND_ADDRESS") {
            config.rpc.bind_address = address;
        }

        if let Ok(port) = env::var("SNOUT_RPC_PORT") {
            config.rpc.port = port
                .parse()
                .map_err(|_| ConfigError::EnvironmentError("Invalid SNOUT_RPC_PORT".to_string()))?;
        }

        if let Ok(max_connections) = env::var("SNOUT_RPC_MAX_CONNECTIONS") {
            config.rpc.max_connections = max_connections.parse().map_err(|_| {
                ConfigError::EnvironmentError("Invalid SNOUT_RPC_MAX_CONNECTIONS".to_string())
            })?;
        }

        if let Ok(timeout) = env::var("SNOUT_RPC_REQUEST_TIMEOUT_SECS") {
            config.rpc.request_timeout_secs = timeout.parse().map_err(|_| {
                ConfigError::EnvironmentError("Invalid SNOUT_RPC_REQUEST_TIMEOUT_SECS".to_string())
            })?;
        }

        Ok(())
    }

    fn apply_logging_overrides(config: &mut SnoutConfig) -> ConfigResult<()> {
        if let Ok(level) = env::var("SNOUT_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = env::var("SNOUT_LOG_FORMAT") {
            config.logging.format = match format.to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::EnvironmentError(format!(
                        "Invalid SNOUT_LOG_FORMAT: {}",
                        other
                    )))
                }
            };
        }

        Ok(())
    }
}
