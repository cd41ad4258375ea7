use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Node identity configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Node identifier, used in logs
    pub id: String,

    /// Data directory (reserved for persistent backends)
    pub data_dir: PathBuf,
}

impl NodeConfig {
    pub fn dev() -> Self {
        Self {
            id: format!("snout-dev-{}", uuid::Uuid::new_v4()),
            data_dir: PathBuf::from("./data"),
        }
    }

    pub fn prod() -> Self {
        Self {
            id: format!("snout-{}", uuid::Uuid::new_v4()),
            data_dir: PathBuf::from("/var/lib/snout"),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.id.is_empty() {
            return Err(ConfigError::Validation("node id must not be empty".to_string()));
        }
        Ok(())
    }
}
