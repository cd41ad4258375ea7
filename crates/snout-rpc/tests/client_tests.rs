//! End-to-end tests driving an in-process RPC server through the HTTP client

use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::server::ServerHandle;
use jsonrpsee::types::error::{CALL_EXECUTION_FAILED_CODE, INVALID_PARAMS_CODE};
use snout_config::RpcConfig;
use snout_core::AuthorityId;
use snout_registry::InMemoryRegistry;
use snout_rpc::{start_rpc_server, SnoutRpcClient};
use snout_utils::utils;
use std::sync::Arc;

const AUTHORITY: &str = "vet-board-multisig";

async fn spawn_server() -> (HttpClient, ServerHandle) {
    let mut config = RpcConfig::dev();
    config.port = 0; // pick a free port

    let store = Arc::new(InMemoryRegistry::new(AuthorityId::new(AUTHORITY)));
    let (addr, handle) = start_rpc_server(&config, store, AUTHORITY).await.unwrap();

    let client = HttpClientBuilder::default()
        .build(format!("http://{}", addr))
        .unwrap();

    (client, handle)
}

/// Identifiers and records travel as 0x-hex on the wire
fn hx(bytes: &[u8]) -> String {
    utils::bytes_to_hex(bytes)
}

fn call_error(err: ClientError) -> jsonrpsee::types::ErrorObjectOwned {
    match err {
        ClientError::Call(obj) => obj,
        other => panic!("expected call error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_hello_smoke() {
    let (client, handle) = spawn_server().await;

    let greeting = client.hello().await.unwrap();
    assert_eq!(greeting, "Hello, World!");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_register_and_lookup_scenario() {
    let (client, handle) = spawn_server().await;

    // Authority registers RFID-001
    let ok = client
        .register(
            AUTHORITY.to_string(),
            hx(b"RFID-001"),
            hx(b"Dr. Smith, Clinic A"),
        )
        .await
        .unwrap();
    assert!(ok);

    // Any caller can look it up
    let looked_up = client.lookup(hx(b"RFID-001")).await.unwrap();
    assert_eq!(
        utils::hex_to_bytes(&looked_up).unwrap(),
        b"Dr. Smith, Clinic A"
    );

    // A non-authority attempting to register is denied
    let err = client
        .register("not-the-board".to_string(), hx(b"RFID-002"), hx(b"x"))
        .await
        .unwrap_err();
    let err = call_error(err);
    assert_eq!(err.code(), CALL_EXECUTION_FAILED_CODE);
    assert!(err.message().contains("Permission denied"));

    // And the denied write left nothing behind
    let err = call_error(client.lookup(hx(b"RFID-002")).await.unwrap_err());
    assert_eq!(err.code(), CALL_EXECUTION_FAILED_CODE);
    assert!(err.message().contains("Not found"));

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_reregistration_overwrites() {
    let (client, handle) = spawn_server().await;

    client
        .register(AUTHORITY.to_string(), hx(b"RFID-001"), hx(b"v1"))
        .await
        .unwrap();
    client
        .register(AUTHORITY.to_string(), hx(b"RFID-001"), hx(b"v2"))
        .await
        .unwrap();

    let looked_up = client.lookup(hx(b"RFID-001")).await.unwrap();
    assert_eq!(utils::hex_to_bytes(&looked_up).unwrap(), b"v2");

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_non_utf8_identifier_round_trip() {
    let (client, handle) = spawn_server().await;

    // Raw tag bytes that are not valid UTF-8 must survive the wire intact
    let tag = [0x00u8, 0xFF, 0xFE, 0x42];
    client
        .register(AUTHORITY.to_string(), hx(&tag), hx(b"Dr. Smith, Clinic A"))
        .await
        .unwrap();

    let looked_up = client.lookup(hx(&tag)).await.unwrap();
    assert_eq!(
        utils::hex_to_bytes(&looked_up).unwrap(),
        b"Dr. Smith, Clinic A"
    );
    assert!(client.contains(hx(&tag)).await.unwrap());

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_empty_record_round_trip() {
    let (client, handle) = spawn_server().await;

    client
        .register(AUTHORITY.to_string(), hx(b"RFID-003"), "0x".to_string())
        .await
        .unwrap();

    // Registered empty record is a successful lookup, not NotFound
    let looked_up = client.lookup(hx(b"RFID-003")).await.unwrap();
    assert_eq!(looked_up, "0x");

    assert!(client.contains(hx(b"RFID-003")).await.unwrap());
    assert!(!client.contains(hx(b"RFID-404")).await.unwrap());

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_invalid_params_are_rejected() {
    let (client, handle) = spawn_server().await;

    // Empty identifier
    let err = call_error(
        client
            .register(AUTHORITY.to_string(), "0x".to_string(), hx(b"x"))
            .await
            .unwrap_err(),
    );
    assert_eq!(err.code(), INVALID_PARAMS_CODE);

    // Identifier without the 0x prefix
    let err = call_error(
        client
            .register(AUTHORITY.to_string(), "RFID-001".to_string(), hx(b"x"))
            .await
            .unwrap_err(),
    );
    assert_eq!(err.code(), INVALID_PARAMS_CODE);

    // Record without the 0x prefix
    let err = call_error(
        client
            .register(AUTHORITY.to_string(), hx(b"RFID-001"), "78".to_string())
            .await
            .unwrap_err(),
    );
    assert_eq!(err.code(), INVALID_PARAMS_CODE);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_registry_info_counters() {
    let (client, handle) = spawn_server().await;

    let info = client.registry_info().await.unwrap();
    assert_eq!(info.authority, AUTHORITY);
    assert_eq!(info.registrations, 0);
    assert_eq!(info.entries, 0);

    client
        .register(AUTHORITY.to_string(), hx(b"RFID-001"), hx(b"v1"))
        .await
        .unwrap();
    client
        .register(AUTHORITY.to_string(), hx(b"RFID-001"), hx(b"v2"))
        .await
        .unwrap();

    let info = client.registry_info().await.unwrap();
    assert_eq!(info.registrations, 2);
    assert_eq!(info.entries, 1);
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));

    handle.stop().unwrap();
}
