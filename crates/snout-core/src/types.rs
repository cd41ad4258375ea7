use serde::{Deserialize, Serialize};
use snout_utils::{utils, RegistryError, RegistryResult};
use std::fmt;

/// Lookup key for a registry entry, e.g. an animal's RFID code
///
/// Identifiers are opaque, non-empty byte strings; the validating
/// constructor is the only way to build one. Like records they travel as
/// 0x-hex over the JSON-RPC wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(Vec<u8>);

impl Identifier {
    /// Create a new identifier, rejecting the empty byte string
    pub fn new(raw: impl Into<Vec<u8>>) -> RegistryResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(RegistryError::InvalidInput(
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Identifier {
    /// Text identifiers display verbatim, binary ones as 0x-hex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(text) => f.write_str(text),
            Err(_) => f.write_str(&utils::bytes_to_hex(&self.0)),
        }
    }
}

/// Value associated with an identifier, e.g. veterinary contact details
///
/// Records are opaque byte strings and may be empty. An empty record is a
/// valid registered value, distinguishable from an absent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<u8>);

impl Record {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Record {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Record {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Identity permitted to write to the registry
///
/// Exactly one authority exists per registry instance, fixed at creation
/// time. Comparison is plain equality; authenticating the asserted identity
/// is the caller boundary's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorityId(String);

impl AuthorityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether an asserted caller identity matches this authority
    pub fn matches(&self, caller: &str) -> bool {
        self.0 == caller
    }
}

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counters maintained alongside the registry mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Total successful register calls since initialization
    pub registrations: u64,
    /// Number of distinct identifiers currently registered
    pub entries: u64,
    /// Unix timestamp (seconds) of the last initialization
    pub created_at: u64,
}
