use thiserror::Error;

/// Core error types used across all Snout crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Write attempted by a caller other than the configured authority
    #[error("Permission denied: caller '{caller}' is not the registry authority")]
    PermissionDenied { caller: String },

    /// Lookup miss; distinct from a successful lookup of an empty record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or missing arguments; no partial mutation occurred
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Standard Result type used across Snout
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience macros for creating errors
#[macro_export]
macro_rules! invalid_input {
    ($msg:expr) => {
        $crate::error::RegistryError::InvalidInput($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::RegistryError::InvalidInput(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! storage_error {
    ($msg:expr) => {
        $crate::error::RegistryError::Storage($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::RegistryError::Storage(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::RegistryError::Internal($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::RegistryError::Internal(format!($fmt, $($arg)*))
    };
}
