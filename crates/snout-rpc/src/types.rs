use serde::{Deserialize, Serialize};

/// Registry information returned by `snout_registryInfo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRegistryInfo {
    /// The identity permitted to register entries
    pub authority: String,
    /// Total successful register calls since initialization
    pub registrations: u64,
    /// Number of distinct identifiers currently registered
    pub entries: u64,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
