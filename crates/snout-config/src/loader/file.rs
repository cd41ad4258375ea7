use crate::{ConfigError, ConfigResult, SnoutConfig};
use std::path::Path;
use tokio::fs;

/// File-based configuration loader
///
/// The `parse_*` methods deserialize without validating, so callers can layer
/// further overrides before deciding the result is final. The `load_*`
/// methods parse and validate in one step.
pub struct FileLoader;

impl FileLoader {
    /// Parse configuration from a TOML file, without validating
    pub async fn parse_toml<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let config: SnoutConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from a JSON file, without validating
    pub async fn parse_json<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let config: SnoutConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Auto-detect file format and parse, without validating
    pub async fn parse_auto<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::parse_toml(path).await,
            Some("json") => Self::parse_json(path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => {
                // Try TOML first, then JSON
                match Self::parse_toml(path).await {
                    Ok(config) => Ok(config),
                    Err(_) => Self::parse_json(path).await,
                }
            }
        }
    }

    /// Load and validate configuration from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let config = Self::parse_toml(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let config = Self::parse_json(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Auto-detect file format, load and validate configuration
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<SnoutConfig> {
        let config = Self::parse_auto(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(config: &SnoutConfig, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::InvalidFormat(format!("TOML serialization failed: {}", e)))?;
        fs::write(path, content).await?;
        Ok(())
    }
}
