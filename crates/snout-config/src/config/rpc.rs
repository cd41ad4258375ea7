use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// JSON-RPC server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Whether the RPC server is started at all
    pub enabled: bool,

    /// Server bind address
    pub bind_address: String,

    /// Server port
    pub port: u16,

    /// Maximum concurrent connections
    pub max_connections: u32,

    /// Per-request timeout in seconds
    ///
    /// Carried and validated but not yet wired into the embedded server;
    /// callers are expected to enforce it at the transport layer.
    pub request_timeout_secs: u64,
}

impl RpcConfig {
    pub fn dev() -> Self {
        Self {
            enabled: true,
            bind_address: "127.0.0.1".to_string(),
            port: 9933,
            max_connections: 100,
            request_timeout_secs: 30,
        }
    }

    pub fn prod() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0".to_string(),
            port: 9933,
            max_connections: 1000,
            request_timeout_secs: 10,
        }
    }

    /// The socket address the server binds to
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!("invalid rpc.bind_address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.socket_addr()?;
        if self.max_connections == 0 {
            return Err(ConfigError::Validation(
                "rpc.max_connections must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "rpc.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::dev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = RpcConfig::dev();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 9933);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_bad_bind_address_fails_validation() {
        let mut config = RpcConfig::dev();
        config.bind_address = "not-an-ip".to_string();
        assert!(config.validate().is_err());
    }
}
