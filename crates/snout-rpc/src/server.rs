//! RPC server implementation

use crate::methods::params;
use crate::types::RpcRegistryInfo;
use crate::{RpcServerError, SnoutRpcServer};
use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::server::{ServerBuilder, ServerHandle};
use snout_config::RpcConfig;
use snout_core::RegistryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// RPC handler backed by a [`RegistryStore`]
pub struct SnoutRpcImpl {
    store: Arc<dyn RegistryStore>,
    authority: String,
    started_at: Instant,
}

impl SnoutRpcImpl {
    pub fn new(store: Arc<dyn RegistryStore>, authority: impl Into<String>) -> Self {
        Self {
            store,
            authority: authority.into(),
            started_at: Instant::now(),
        }
    }
}

#[async_trait]
impl SnoutRpcServer for SnoutRpcImpl {
    async fn register(
        &self,
        caller: String,
        identifier_hex: String,
        record_hex: String,
    ) -> RpcResult<bool> {
        let identifier = params::parse_identifier(&identifier_hex)?;
        let record = params::parse_record_hex(&record_hex)?;

        self.store
            .register(&caller, &identifier, record)
            .await
            .map_err(RpcServerError::from)?;

        Ok(true)
    }

    async fn lookup(&self, identifier_hex: String) -> RpcResult<String> {
        let identifier = params::parse_identifier(&identifier_hex)?;

        let record = self
            .store
            .lookup(&identifier)
            .await
            .map_err(RpcServerError::from)?;

        Ok(params::format_record(&record))
    }

    async fn contains(&self, identifier_hex: String) -> RpcResult<bool> {
        let identifier = params::parse_identifier(&identifier_hex)?;

        let present = self
            .store
            .contains(&identifier)
            .await
            .map_err(RpcServerError::from)?;

        Ok(present)
    }

    async fn registry_info(&self) -> RpcResult<RpcRegistryInfo> {
        let stats = self.store.stats().await.map_err(RpcServerError::from)?;

        Ok(RpcRegistryInfo {
            authority: self.authority.clone(),
            registrations: stats.registrations,
            entries: stats.entries,
            uptime_seconds: self.started_at.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    async fn version(&self) -> RpcResult<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    async fn hello(&self) -> RpcResult<String> {
        Ok("Hello, World!".to_string())
    }
}

/// Build and start the RPC server
///
/// Returns the bound address (useful when the configured port is 0) and the
/// handle used to stop the server.
pub async fn start_rpc_server(
    config: &RpcConfig,
    store: Arc<dyn RegistryStore>,
    authority: impl Into<String>,
) -> Result<(SocketAddr, ServerHandle), RpcServerError> {
    let bind_addr = config
        .socket_addr()
        .map_err(|e| RpcServerError::Server(e.to_string()))?;

    let server = ServerBuilder::default()
        .max_connections(config.max_connections)
        .build(bind_addr)
        .await
        .map_err(|e| RpcServerError::Server(format!("failed to bind {}: {}", bind_addr, e)))?;

    let local_addr = server
        .local_addr()
        .map_err(|e| RpcServerError::Server(e.to_string()))?;

    let rpc = SnoutRpcImpl::new(store, authority);
    let handle = server.start(rpc.into_rpc());

    info!(address = %local_addr, "RPC server listening");
    Ok((local_addr, handle))
}
