//! Configuration structures, one module per section

pub mod logging;
pub mod node;
pub mod registry;
pub mod rpc;
pub mod snout;

pub use logging::{LogFormat, LoggingConfig};
pub use node::NodeConfig;
pub use registry::RegistryConfig;
pub use rpc::RpcConfig;
pub use snout::SnoutConfig;
