//! Core domain types and traits for the Snout registry
//!
//! A registry is a global mapping from an [`Identifier`] (an RFID code) to a
//! [`Record`] (veterinary details), writable only by the single
//! [`AuthorityId`] fixed at creation and readable by anyone. The
//! [`RegistryStore`] trait is the seam between callers and storage backends.

pub mod traits;
pub mod types;

pub use traits::RegistryStore;
pub use types::{AuthorityId, Identifier, Record, RegistryStats};

// Re-export the shared error types so downstream crates only need one import
pub use snout_utils::{RegistryError, RegistryResult};
