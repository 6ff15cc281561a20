//! # In-Memory Ledger
//!
//! Committed key-value state plus buffered transactions. Reads inside a
//! transaction see committed state only; writes land on `commit`.

use crate::domain::entities::SerializedIdentity;
use crate::domain::errors::RegistryError;
use crate::ports::outbound::{LedgerContext, LedgerError};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use tracing::debug;

/// In-memory key-value ledger for tests and the local runtime.
///
/// State changes only through `LedgerTransaction::commit`; a transaction that
/// is dropped leaves the ledger untouched.
pub struct InMemoryLedger {
    state: RwLock<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Open a transaction submitted by the holder of `creator` at `timestamp`.
    pub fn begin(&self, creator: Vec<u8>, timestamp: i64) -> LedgerTransaction<'_> {
        LedgerTransaction {
            ledger: self,
            creator,
            timestamp,
            writes: BTreeMap::new(),
        }
    }

    /// Open a transaction submitted by `identity`.
    pub fn begin_as(
        &self,
        identity: &SerializedIdentity,
        timestamp: i64,
    ) -> Result<LedgerTransaction<'_>, RegistryError> {
        Ok(self.begin(identity.to_bytes()?, timestamp))
    }

    /// Committed value at `key`.
    pub fn committed(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let state = self.state.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.get(key).cloned())
    }

    /// Number of committed keys.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let state = self.state.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(state.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }

    /// Make every subsequent `put_state` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// One transaction against an `InMemoryLedger`.
///
/// Writes are buffered; reads see committed state only, never this
/// transaction's own pending writes.
pub struct LedgerTransaction<'a> {
    ledger: &'a InMemoryLedger,
    creator: Vec<u8>,
    timestamp: i64,
    writes: BTreeMap<String, Vec<u8>>,
}

impl LedgerTransaction<'_> {
    /// Number of buffered writes.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Apply all buffered writes atomically.
    pub fn commit(self) -> Result<(), LedgerError> {
        let mut state = self
            .ledger
            .state
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;
        debug!(writes = self.writes.len(), "Committing ledger transaction");
        state.extend(self.writes);
        Ok(())
    }
}

impl LedgerContext for LedgerTransaction<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.ledger.committed(key).map_err(|_| LedgerError::Read {
            key: key.to_string(),
            reason: "ledger state lock poisoned".to_string(),
        })
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        if self.ledger.fail_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::Write {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        self.writes.insert(key.to_string(), value);
        Ok(())
    }

    fn tx_timestamp(&self) -> Result<i64, LedgerError> {
        Ok(self.timestamp)
    }

    fn creator(&self) -> Result<Vec<u8>, LedgerError> {
        if self.creator.is_empty() {
            return Err(LedgerError::CreatorUnavailable);
        }
        Ok(self.creator.clone())
    }
}
