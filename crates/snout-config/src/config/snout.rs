use super::*;
use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};

/// Deployment profiles with different defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Profile::Dev),
            "prod" | "production" => Ok(Profile::Prod),
            other => Err(format!("unknown profile: {}", other)),
        }
    }
}

/// Main configuration structure for the Snout registry service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnoutConfig {
    /// Node identity settings
    pub node: NodeConfig,

    /// Registry behavior and authority
    pub registry: RegistryConfig,

    /// JSON-RPC server settings
    pub rpc: RpcConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl SnoutConfig {
    /// Create a new configuration with defaults for the given profile
    pub fn new_for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Dev => Self {
                node: NodeConfig::dev(),
                registry: RegistryConfig::dev(),
                rpc: RpcConfig::dev(),
                logging: LoggingConfig::dev(),
            },
            Profile::Prod => Self {
                node: NodeConfig::prod(),
                registry: RegistryConfig::prod(),
                rpc: RpcConfig::prod(),
                logging: LoggingConfig::prod(),
            },
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> ConfigResult<()> {
        self.node.validate()?;
        self.registry.validate()?;
        self.rpc.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for SnoutConfig {
    fn default() -> Self {
        Self::new_for_profile(Profile::Dev)
    }
}
