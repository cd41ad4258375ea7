//! Snout registry CLI
//!
//! `snout start` runs the registry service; the remaining subcommands are
//! JSON-RPC client calls against a running instance.

use anyhow::Context;
use clap::{Parser, Subcommand};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use snout_config::{ConfigLoader, LogFormat};
use snout_core::AuthorityId;
use snout_registry::InMemoryRegistry;
use snout_rpc::{start_rpc_server, SnoutRpcClient};
use snout_utils::{logging, utils};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "snout")]
#[command(about = "Snout animal registry service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry service
    Start {
        /// Configuration file (TOML or JSON); SNOUT_* env vars override it
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Register a record for an identifier (authority only)
    Register {
        /// RFID code to register
        identifier: String,
        /// Record text, e.g. veterinary contact details
        record: String,
        /// Caller identity asserted to the server
        #[arg(short, long)]
        caller: String,
        #[arg(short, long, default_value = "http://127.0.0.1:9933")]
        url: String,
    },
    /// Look up the record for an identifier
    Lookup {
        /// RFID code to look up
        identifier: String,
        #[arg(short, long, default_value = "http://127.0.0.1:9933")]
        url: String,
    },
    /// Check whether an identifier is registered
    Contains {
        identifier: String,
        #[arg(short, long, default_value = "http://127.0.0.1:9933")]
        url: String,
    },
    /// Show registry information
    Info {
        #[arg(short, long, default_value = "http://127.0.0.1:9933")]
        url: String,
    },
}

fn client(url: &str) -> anyhow::Result<HttpClient> {
    HttpClientBuilder::default()
        .build(url)
        .with_context(|| format!("failed to build RPC client for {}", url))
}

async fn run_service(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let loader = ConfigLoader::new();
    let config = loader
        .load_with_overrides(config_path.as_ref())
        .await
        .context("failed to load configuration")?;

    match config.logging.format {
        LogFormat::Text => logging::init_logging_with_level(&config.logging.level),
        LogFormat::Json => logging::init_json_logging(&config.logging.level),
    }

    info!(node_id = %config.node.id, "starting snout registry service");

    if !config.rpc.enabled {
        warn!("rpc.enabled is false; nothing to serve");
        return Ok(());
    }

    let store = Arc::new(InMemoryRegistry::with_max_record_bytes(
        AuthorityId::new(config.registry.authority.clone()),
        config.registry.max_record_bytes,
    ));

    let (addr, handle) = start_rpc_server(&config.rpc, store, config.registry.authority.clone())
        .await
        .context("failed to start RPC server")?;

    info!(address = %addr, authority = %config.registry.authority, "registry service ready");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("shutting down");
    handle.stop().context("failed to stop RPC server")?;
    handle.stopped().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start { config } => run_service(config).await?,
        Commands::Register {
            identifier,
            record,
            caller,
            url,
        } => {
            let client = client(&url)?;
            let identifier_hex = utils::bytes_to_hex(identifier.as_bytes());
            let record_hex = utils::bytes_to_hex(record.as_bytes());
            client.register(caller, identifier_hex, record_hex).await?;
            println!("registered {}", identifier);
        }
        Commands::Lookup { identifier, url } => {
            let client = client(&url)?;
            let record_hex = client
                .lookup(utils::bytes_to_hex(identifier.as_bytes()))
                .await?;
            let bytes = utils::hex_to_bytes(&record_hex)?;
            match String::from_utf8(bytes) {
                Ok(text) => println!("{}", text),
                // Non-textual records are printed as hex
                Err(_) => println!("{}", record_hex),
            }
        }
        Commands::Contains { identifier, url } => {
            let client = client(&url)?;
            let present = client
                .contains(utils::bytes_to_hex(identifier.as_bytes()))
                .await?;
            println!("{}", present);
        }
        Commands::Info { url } => {
            let client = client(&url)?;
            let info = client.registry_info().await?;
            println!("authority:     {}", info.authority);
            println!("entries:       {}", info.entries);
            println!("registrations: {}", info.registrations);
            println!("uptime:        {}s", info.uptime_seconds);
            println!("version:       {}", info.version);
        }
    }

    Ok(())
}
