use crate::types::{Identifier, Record, RegistryStats};
use async_trait::async_trait;
use snout_utils::RegistryResult;

/// Core trait for registry storage backends
///
/// The RegistryStore provides a unified interface for registry operations
/// that can be implemented by different backends (in-memory, persistent,
/// etc.). Writes are restricted to the single authority configured at
/// construction time; reads are open to any caller.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Reset the registry to its initial empty state
    ///
    /// Clears the mapping and resets the registration counters. Always
    /// succeeds for in-memory backends.
    async fn initialize(&self) -> RegistryResult<()>;

    /// Insert or overwrite the record for an identifier
    ///
    /// # Arguments
    /// * `caller` - Asserted identity of the invoking party
    /// * `identifier` - The key to store under
    /// * `record` - The value to store; may be empty
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(PermissionDenied)` if `caller` is not the authority; the
    ///   mapping is left unchanged
    /// * `Err(_)` on storage errors
    async fn register(
        &self,
        caller: &str,
        identifier: &Identifier,
        record: Record,
    ) -> RegistryResult<()>;

    /// Retrieve the record for an identifier
    ///
    /// No authorization required. Has no side effects.
    ///
    /// # Returns
    /// * `Ok(record)` if the identifier is registered, even when the record
    ///   is empty
    /// * `Err(NotFound)` if the identifier has never been registered
    async fn lookup(&self, identifier: &Identifier) -> RegistryResult<Record>;

    /// Check whether an identifier is registered without copying the record
    ///
    /// # Returns
    /// * `Ok(true)` if the identifier exists
    /// * `Ok(false)` if it doesn't
    async fn contains(&self, identifier: &Identifier) -> RegistryResult<bool>;

    /// Get the registry counters
    async fn stats(&self) -> RegistryResult<RegistryStats>;
}
