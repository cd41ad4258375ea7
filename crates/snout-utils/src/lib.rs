//! Shared utilities for the Snout registry workspace
//!
//! Error taxonomy, logging initialization and small helpers used by every
//! other crate.

pub mod error;
pub mod logging;

pub use error::{RegistryError, RegistryResult};

/// Utility functions for common operations
pub mod utils {
    use crate::error::{RegistryError, RegistryResult};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Get current timestamp in seconds
    pub fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    /// Get current timestamp in milliseconds
    pub fn current_timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Format bytes as a 0x-prefixed hex string
    pub fn bytes_to_hex(bytes: &[u8]) -> String {
        format!("0x{}", hex::encode(bytes))
    }

    /// Parse a 0x-prefixed hex string into bytes
    ///
    /// The prefix is mandatory; an empty payload (`"0x"`) is valid and
    /// decodes to an empty byte string.
    pub fn hex_to_bytes(input: &str) -> RegistryResult<Vec<u8>> {
        let payload = input
            .strip_prefix("0x")
            .ok_or_else(|| RegistryError::InvalidInput("hex string must start with 0x".to_string()))?;

        hex::decode(payload)
            .map_err(|e| RegistryError::InvalidInput(format!("invalid hex string: {}", e)))
    }
}
