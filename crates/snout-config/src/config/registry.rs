use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Registry behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// The single identity permitted to register entries
    ///
    /// Fixed for the lifetime of the service; there is no way to rotate it
    /// without a restart.
    pub authority: String,

    /// Maximum record size accepted by register, in bytes
    pub max_record_bytes: usize,
}

impl RegistryConfig {
    pub fn dev() -> Self {
        Self {
            // Placeholder so a bare dev start is usable out of the box
            authority: "snout-dev-authority".to_string(),
            max_record_bytes: 64 * 1024,
        }
    }

    pub fn prod() -> Self {
        Self {
            // Must be set explicitly; validation rejects the blank value
            authority: String::new(),
            max_record_bytes: 16 * 1024,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.authority.is_empty() {
            return Err(ConfigError::Validation(
                "registry.authority must be set".to_string(),
            ));
        }
        if self.max_record_bytes == 0 {
            return Err(ConfigError::Validation(
                "registry.max_record_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
