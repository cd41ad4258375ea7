//! RPC parameter validation helpers

use crate::RpcServerError;
use snout_core::{Identifier, Record};
use snout_utils::utils;

/// Utility functions for RPC method implementations
pub mod params {
    use super::*;

    /// Parse a 0x-prefixed hex identifier parameter
    ///
    /// An empty payload (`"0x"`) is rejected; identifiers must be non-empty.
    pub fn parse_identifier(raw: &str) -> Result<Identifier, RpcServerError> {
        let bytes = utils::hex_to_bytes(raw)
            .map_err(|e| RpcServerError::InvalidParams(e.to_string()))?;
        Identifier::new(bytes).map_err(|e| RpcServerError::InvalidParams(e.to_string()))
    }

    /// Parse a 0x-prefixed hex record parameter
    pub fn parse_record_hex(raw: &str) -> Result<Record, RpcServerError> {
        let bytes = utils::hex_to_bytes(raw)
            .map_err(|e| RpcServerError::InvalidParams(e.to_string()))?;
        Ok(Record::new(bytes))
    }

    /// Format a record for the wire
    pub fn format_record(record: &Record) -> String {
        utils::bytes_to_hex(record.as_bytes())
    }
}
