//! # Domain Entities
//!
//! Persisted records, external identity records and the invocation response
//! envelope.

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};

/// Ledger key holding the raw authority org id.
pub const AUTHORITY_KEY: &str = "propertyAuthority";

/// Prefix for property record keys.
pub const PROPERTY_KEY_PREFIX: &str = "property_";

/// Ledger key for the property with external id `id`.
pub fn property_key(id: &str) -> String {
    format!("{PROPERTY_KEY_PREFIX}{id}")
}

// =============================================================================
// PROPERTY
// =============================================================================

/// A registered property.
///
/// ## Invariants
///
/// - `history` is never empty and `history.last() == Some(&owner)`
/// - `history.len() == 1 + number of successful transfers`
/// - `created_on` never changes after creation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Opaque descriptive location
    pub location: String,
    /// Current owner identity reference
    pub owner: String,
    /// Creation time, seconds, from the creating transaction's timestamp
    pub created_on: i64,
    /// Every owner the property has had, oldest first
    pub history: Vec<String>,
}

impl Property {
    /// Create a record owned by `owner` with a one-entry history.
    pub fn new(location: impl Into<String>, owner: impl Into<String>, created_on: i64) -> Self {
        let owner = owner.into();
        Self {
            location: location.into(),
            history: vec![owner.clone()],
            owner,
            created_on,
        }
    }

    /// Move ownership to `new_owner` and record it in the history.
    pub fn transfer_to(&mut self, new_owner: &str) {
        self.owner = new_owner.to_string();
        self.history.push(new_owner.to_string());
    }

    /// Number of completed transfers.
    pub fn transfer_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Check the history/owner invariant.
    pub fn is_consistent(&self) -> bool {
        self.history.last() == Some(&self.owner)
    }

    /// Serialize to the stored JSON form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        serde_json::to_vec(self).map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    /// Parse a stored record, rejecting records that break the invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        let property: Self = serde_json::from_slice(bytes)
            .map_err(|e| RegistryError::Deserialization(e.to_string()))?;

        if !property.is_consistent() {
            return Err(RegistryError::Deserialization(
                "history does not end with the current owner".to_string(),
            ));
        }

        Ok(property)
    }
}

// =============================================================================
// USER RECORD (owned by the Identity Service)
// =============================================================================

/// Public-key record returned by the Identity Service. Read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Encoded public key; its encoding selects the signature scheme
    pub public_key: String,
    /// Hash of off-ledger user metadata
    #[serde(default)]
    pub metadata_hash: String,
    /// Permissions granted by the Identity Service
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserRecord {
    /// Record carrying only a public key.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            metadata_hash: String::new(),
            permissions: Vec::new(),
        }
    }
}

// =============================================================================
// CALLER CREDENTIAL
// =============================================================================

/// Caller credential as carried by the ledger.
///
/// Only `msp_id` (the organisation id) matters for authorisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedIdentity {
    /// Organisation (membership service provider) id
    pub msp_id: String,
    /// Opaque member certificate bytes
    #[serde(default)]
    pub id_bytes: Vec<u8>,
}

impl SerializedIdentity {
    /// Create an identity for organisation `msp_id` with no certificate bytes.
    pub fn new(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            id_bytes: Vec::new(),
        }
    }

    /// Encode as the opaque credential bytes the ledger hands out.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        bincode::serialize(self).map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    /// Decode opaque credential bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        bincode::deserialize(bytes).map_err(|e| {
            RegistryError::Deserialization(format!("caller credential: {e}"))
        })
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Result of one invocation: a status, a message on failure, a payload on
/// success. Also the shape the Identity Service answers with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `Response::OK` or `Response::ERROR`
    pub status: i32,
    /// Error message (empty on success)
    pub message: String,
    /// Success payload (may be empty)
    pub payload: Vec<u8>,
}

impl Response {
    /// Success status.
    pub const OK: i32 = 200;
    /// Failure status.
    pub const ERROR: i32 = 500;

    /// Successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response carrying a single message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// True when the status is `OK`.
    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}
