use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive passed to the subscriber, e.g. "info" or "snout=debug"
    pub level: String,

    /// Line format
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn dev() -> Self {
        Self {
            level: "debug".to_string(),
            format: LogFormat::Text,
        }
    }

    pub fn prod() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.level.is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_serde_names() {
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), "\"json\"");
        let format: LogFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, LogFormat::Text);
    }
}
