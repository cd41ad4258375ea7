//! JSON-RPC server for the Snout registry
//!
//! Exposes the registry operations over HTTP: authority-gated register,
//! public lookup, registry information, and a fixed hello diagnostic for
//! smoke tests.

pub mod methods;
pub mod server;
pub mod types;

pub use server::{start_rpc_server, SnoutRpcImpl};
pub use types::RpcRegistryInfo;

use jsonrpsee::{core::RpcResult, proc_macros::rpc, types::ErrorObjectOwned};
use snout_utils::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcServerError {
    #[error("Server error: {0}")]
    Server(String),
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<RegistryError> for RpcServerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::PermissionDenied { caller } => {
                RpcServerError::PermissionDenied(caller)
            }
            RegistryError::NotFound(identifier) => RpcServerError::NotFound(identifier),
            RegistryError::InvalidInput(msg) => RpcServerError::InvalidParams(msg),
            other => RpcServerError::Server(other.to_string()),
        }
    }
}

impl From<RpcServerError> for ErrorObjectOwned {
    fn from(err: RpcServerError) -> Self {
        use jsonrpsee::types::error::{
            CALL_EXECUTION_FAILED_CODE, INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE,
        };

        match err {
            RpcServerError::InvalidParams(msg) => {
                ErrorObjectOwned::owned(INVALID_PARAMS_CODE, msg, None::<()>)
            }
            RpcServerError::PermissionDenied(_) | RpcServerError::NotFound(_) => {
                ErrorObjectOwned::owned(CALL_EXECUTION_FAILED_CODE, err.to_string(), None::<()>)
            }
            _ => ErrorObjectOwned::owned(INTERNAL_ERROR_CODE, err.to_string(), None::<()>),
        }
    }
}

/// Main RPC API trait defining all available methods
#[rpc(server, client)]
pub trait SnoutRpc {
    /// Register or overwrite the record for an identifier
    ///
    /// `caller` is the asserted identity of the invoking party and must match
    /// the configured authority. Identifier and record are both opaque byte
    /// strings carried as 0x-prefixed hex; `"0x"` registers an empty record,
    /// while an empty identifier is rejected.
    #[method(name = "snout_register")]
    async fn register(&self, caller: String, identifier_hex: String, record_hex: String)
        -> RpcResult<bool>;

    /// Look up the record for an identifier, as a 0x-prefixed hex string
    #[method(name = "snout_lookup")]
    async fn lookup(&self, identifier_hex: String) -> RpcResult<String>;

    /// Check whether an identifier is registered
    #[method(name = "snout_contains")]
    async fn contains(&self, identifier_hex: String) -> RpcResult<bool>;

    /// Get registry information and counters
    #[method(name = "snout_registryInfo")]
    async fn registry_info(&self) -> RpcResult<RpcRegistryInfo>;

    /// Get server version
    #[method(name = "snout_version")]
    async fn version(&self) -> RpcResult<String>;

    /// Fixed diagnostic greeting, used by deployment smoke tests
    #[method(name = "snout_hello")]
    async fn hello(&self) -> RpcResult<String>;
}
