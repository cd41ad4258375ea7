//! Configuration loading and environment handling

pub mod env;
pub mod file;

pub use env::EnvLoader;
pub use file::FileLoader;

use crate::{ConfigResult, SnoutConfig};
use std::path::Path;

/// Main configuration loader
///
/// Precedence: environment variables > config file > profile defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file, without environment overrides
    pub async fn load_config<P: AsRef<Path>>(&self, path: P) -> ConfigResult<SnoutConfig> {
        FileLoader::load_auto(path).await
    }

    /// Load with full precedence applied
    ///
    /// Starts from the file when given (an unreadable or malformed file is an
    /// error), then layers `SNOUT_*` environment overrides on top, then
    /// validates the combined result. Validation runs only after the
    /// overrides, so an environment variable can supply a value the file
    /// leaves blank. Without a file, configuration comes from the profile
    /// defaults plus environment overrides.
    pub async fn load_with_overrides<P: AsRef<Path>>(
        &self,
        config_path: Option<P>,
    ) -> ConfigResult<SnoutConfig> {
        let mut config = match config_path {
            Some(path) => FileLoader::parse_auto(path).await?,
            None => return EnvLoader::load_from_env(),
        };

        EnvLoader::apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
