//! In-memory registry store
//!
//! Single-writer / multi-reader mapping guarded by a `tokio::sync::RwLock`:
//! register calls serialize through the write half, lookups share the read
//! half. Every operation is one atomic guarded access, so a failed call can
//! never leave partial state behind.

pub mod store;

pub use store::InMemoryRegistry;
