//! # Outbound Ports (Driven Ports / SPI)
//!
//! External collaborators this subsystem depends on:
//! - The host ledger (state access, transaction timestamp, caller credential)
//! - The Identity Service (owner id → public-key record)
//!
//! ## Execution Model
//!
//! Every call is synchronous and runs inside one host transaction. The host
//! serialises or conflict-checks concurrent transactions touching the same
//! key; nothing here locks, retries or times out.

use crate::domain::entities::{Response, UserRecord};
use crate::domain::errors::RegistryError;
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// LEDGER CONTEXT
// =============================================================================

/// Error from ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A state read failed
    #[error("read of {key} failed: {reason}")]
    Read { key: String, reason: String },

    /// A state write failed
    #[error("write of {key} failed: {reason}")]
    Write { key: String, reason: String },

    /// The transaction timestamp is unavailable
    #[error("transaction timestamp unavailable")]
    TimestampUnavailable,

    /// The caller credential is unavailable
    #[error("caller credential unavailable")]
    CreatorUnavailable,

    /// In-memory state lock poisoned
    #[error("ledger state lock poisoned")]
    LockPoisoned,
}

impl From<LedgerError> for RegistryError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Write { .. } => RegistryError::StateWrite(e.to_string()),
            _ => RegistryError::StateRead(e.to_string()),
        }
    }
}

/// Per-invocation view of the host ledger.
///
/// Writes become durable only if the host commits the surrounding
/// transaction. Reads observe committed state.
pub trait LedgerContext {
    /// Read the value at `key`; `None` when absent.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Stage `value` at `key`.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Transaction timestamp, whole seconds.
    fn tx_timestamp(&self) -> Result<i64, LedgerError>;

    /// Serialized credential of the submitting caller.
    fn creator(&self) -> Result<Vec<u8>, LedgerError>;
}

// =============================================================================
// IDENTITY SERVICE
// =============================================================================

/// Request/response transport to a separately deployed service.
///
/// Mirrors a cross-contract call: a target name, byte arguments (first is the
/// function name) and a channel, answered with a `Response`.
pub trait IdentityService: Send + Sync {
    /// Invoke `chaincode` with `args` on `channel`. Blocking.
    fn invoke(&self, chaincode: &str, args: &[Vec<u8>], channel: &str) -> Response;
}

impl<S: IdentityService + ?Sized> IdentityService for Arc<S> {
    fn invoke(&self, chaincode: &str, args: &[Vec<u8>], channel: &str) -> Response {
        (**self).invoke(chaincode, args, channel)
    }
}

/// Resolves an owner id to its public-key record.
pub trait IdentityResolver: Send + Sync {
    /// Resolve `owner_id` through the Identity Service on `channel`.
    ///
    /// # Errors
    /// * `IdentityResolution` - non-OK response (message verbatim) or an
    ///   unparsable payload
    fn resolve(&self, owner_id: &str, channel: &str) -> Result<UserRecord, RegistryError>;
}
