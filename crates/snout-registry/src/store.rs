use async_trait::async_trait;
use snout_core::{AuthorityId, Identifier, Record, RegistryError, RegistryResult, RegistryStats, RegistryStore};
use snout_utils::utils::current_timestamp;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Mutable registry state guarded by a single lock
///
/// Writers take the lock exclusively so concurrent register calls serialize
/// last-write-wins; readers share it and observe a consistent snapshot.
struct RegistryState {
    entries: HashMap<Identifier, Record>,
    registrations: u64,
    created_at: u64,
}

impl RegistryState {
    fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            registrations: 0,
            created_at: current_timestamp(),
        }
    }
}

/// In-memory implementation of [`RegistryStore`]
///
/// State lives for the lifetime of the hosting process. The authority is
/// fixed at construction and immutable thereafter.
pub struct InMemoryRegistry {
    authority: AuthorityId,
    max_record_bytes: Option<usize>,
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    /// Create an empty registry owned by `authority`
    pub fn new(authority: AuthorityId) -> Self {
        Self {
            authority,
            max_record_bytes: None,
            state: RwLock::new(RegistryState::empty()),
        }
    }

    /// Create an empty registry with a record size cap
    pub fn with_max_record_bytes(authority: AuthorityId, max_record_bytes: usize) -> Self {
        Self {
            authority,
            max_record_bytes: Some(max_record_bytes),
            state: RwLock::new(RegistryState::empty()),
        }
    }

    /// The authority permitted to register entries
    pub fn authority(&self) -> &AuthorityId {
        &self.authority
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistry {
    async fn initialize(&self) -> RegistryResult<()> {
        let mut state = self.state.write().await;
        *state = RegistryState::empty();
        info!(authority = %self.authority, "registry initialized");
        Ok(())
    }

    async fn register(
        &self,
        caller: &str,
        identifier: &Identifier,
        record: Record,
    ) -> RegistryResult<()> {
        if !self.authority.matches(caller) {
            warn!(caller, identifier = %identifier, "register rejected: not the authority");
            return Err(RegistryError::PermissionDenied {
                caller: caller.to_string(),
            });
        }

        if let Some(max) = self.max_record_bytes {
            if record.len() > max {
                return Err(RegistryError::InvalidInput(format!(
                    "record of {} bytes exceeds limit of {} bytes",
                    record.len(),
                    max
                )));
            }
        }

        let mut state = self.state.write().await;
        let replaced = state.entries.insert(identifier.clone(), record).is_some();
        state.registrations += 1;

        info!(identifier = %identifier, replaced, "record registered");
        Ok(())
    }

    async fn lookup(&self, identifier: &Identifier) -> RegistryResult<Record> {
        let state = self.state.read().await;
        match state.entries.get(identifier) {
            Some(record) => {
                debug!(identifier = %identifier, bytes = record.len(), "lookup hit");
                Ok(record.clone())
            }
            None => {
                debug!(identifier = %identifier, "lookup miss");
                Err(RegistryError::NotFound(identifier.to_string()))
            }
        }
    }

    async fn contains(&self, identifier: &Identifier) -> RegistryResult<bool> {
        let state = self.state.read().await;
        Ok(state.entries.contains_key(identifier))
    }

    async fn stats(&self) -> RegistryResult<RegistryStats> {
        let state = self.state.read().await;
        Ok(RegistryStats {
            registrations: state.registrations,
            entries: state.entries.len() as u64,
            created_at: state.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORITY: &str = "vet-board-multisig";

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new(AuthorityId::new(AUTHORITY))
    }

    fn id(raw: &str) -> Identifier {
        Identifier::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_of_unregistered_key_is_not_found() {
        let store = registry();
        let err = store.lookup(&id("RFID-404")).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound("RFID-404".to_string()));
    }

    #[tokio::test]
    async fn test_register_then_lookup_round_trip() {
        let store = registry();
        store
            .register(AUTHORITY, &id("RFID-001"), Record::from("Dr. Smith, Clinic A"))
            .await
            .unwrap();

        let record = store.lookup(&id("RFID-001")).await.unwrap();
        assert_eq!(record.as_bytes(), b"Dr. Smith, Clinic A");
    }

    #[tokio::test]
    async fn test_non_authority_register_is_denied_and_mutates_nothing() {
        let store = registry();
        let err = store
            .register("random-caller", &id("RFID-002"), Record::from("x"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::PermissionDenied {
                caller: "random-caller".to_string()
            }
        );

        assert!(!store.contains(&id("RFID-002")).await.unwrap());
        assert_eq!(store.stats().await.unwrap().registrations, 0);
    }

    #[tokio::test]
    async fn test_reregistering_overwrites_prior_record() {
        let store = registry();
        let key = id("RFID-001");

        store
            .register(AUTHORITY, &key, Record::from("Dr. Smith, Clinic A"))
            .await
            .unwrap();
        store
            .register(AUTHORITY, &key, Record::from("Dr. Jones, Clinic B"))
            .await
            .unwrap();

        let record = store.lookup(&key).await.unwrap();
        assert_eq!(record.as_bytes(), b"Dr. Jones, Clinic B");

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.registrations, 2);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_non_utf8_identifier_round_trip() {
        let store = registry();
        let key = Identifier::new(vec![0x00, 0xFF, 0xFE, 0x42]).unwrap();

        store
            .register(AUTHORITY, &key, Record::from("Dr. Smith, Clinic A"))
            .await
            .unwrap();

        let record = store.lookup(&key).await.unwrap();
        assert_eq!(record.as_bytes(), b"Dr. Smith, Clinic A");
        assert!(store.contains(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_initialize_empties_the_mapping() {
        let store = registry();
        store
            .register(AUTHORITY, &id("RFID-001"), Record::from("Dr. Smith"))
            .await
            .unwrap();

        store.initialize().await.unwrap();

        let err = store.lookup(&id("RFID-001")).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
        assert_eq!(store.stats().await.unwrap().registrations, 0);
    }

    #[tokio::test]
    async fn test_empty_record_is_distinguishable_from_not_found() {
        let store = registry();
        store
            .register(AUTHORITY, &id("RFID-003"), Record::new(vec![]))
            .await
            .unwrap();

        let record = store.lookup(&id("RFID-003")).await.unwrap();
        assert!(record.is_empty());
    }

    #[tokio::test]
    async fn test_record_size_cap() {
        let store = InMemoryRegistry::with_max_record_bytes(AuthorityId::new(AUTHORITY), 8);
        let err = store
            .register(AUTHORITY, &id("RFID-004"), Record::from("way too many bytes"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidInput(_)));
        assert!(!store.contains(&id("RFID-004")).await.unwrap());
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let store = registry();

        // Authority registers RFID-001
        store
            .register(AUTHORITY, &id("RFID-001"), Record::from("Dr. Smith, Clinic A"))
            .await
            .unwrap();

        // Any caller can look it up
        let record = store.lookup(&id("RFID-001")).await.unwrap();
        assert_eq!(record.as_bytes(), b"Dr. Smith, Clinic A");

        // A non-authority cannot register
        let err = store
            .register("not-the-board", &id("RFID-002"), Record::from("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::PermissionDenied { .. }));

        // And the failed write left no trace
        let err = store.lookup(&id("RFID-002")).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound("RFID-002".to_string()));
    }

    #[tokio::test]
    async fn test_concurrent_readers_and_writer() {
        use std::sync::Arc;

        let store = Arc::new(registry());
        store
            .register(AUTHORITY, &id("RFID-001"), Record::from("v0"))
            .await
            .unwrap();

        let mut tasks = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    let record = store.lookup(&id("RFID-001")).await.unwrap();
                    assert!(!record.as_bytes().is_empty());
                } else {
                    store
                        .register(AUTHORITY, &id("RFID-001"), Record::from("v1"))
                        .await
                        .unwrap();
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // One key, many registrations
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.registrations, 5);
    }
}
