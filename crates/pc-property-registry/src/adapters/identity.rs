//! Identity Service adapters.
//!
//! `ServiceIdentityResolver` speaks the cross-contract protocol: it invokes
//! `<function>(ownerId)` on the identity contract and parses the returned
//! user record. `InMemoryIdentityService` answers that protocol from a local
//! table, per channel.

use crate::config::{DEFAULT_IDENTITY_CHAINCODE, DEFAULT_IDENTITY_FUNCTION};
use crate::domain::entities::{Response, UserRecord};
use crate::domain::errors::RegistryError;
use crate::ports::outbound::{IdentityResolver, IdentityService, LedgerError};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

// =============================================================================
// RESOLVER
// =============================================================================

/// Resolves owner ids by invoking the identity contract.
pub struct ServiceIdentityResolver<S> {
    service: S,
    chaincode: String,
    function: String,
}

impl<S: IdentityService> ServiceIdentityResolver<S> {
    /// Resolver targeting the default contract and function names.
    pub fn new(service: S) -> Self {
        Self::with_target(service, DEFAULT_IDENTITY_CHAINCODE, DEFAULT_IDENTITY_FUNCTION)
    }

    pub fn with_target(
        service: S,
        chaincode: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            service,
            chaincode: chaincode.into(),
            function: function.into(),
        }
    }
}

impl<S: IdentityService> IdentityResolver for ServiceIdentityResolver<S> {
    fn resolve(&self, owner_id: &str, channel: &str) -> Result<UserRecord, RegistryError> {
        let args = [
            self.function.as_bytes().to_vec(),
            owner_id.as_bytes().to_vec(),
        ];
        let response = self.service.invoke(&self.chaincode, &args, channel);

        if !response.is_ok() {
            return Err(RegistryError::IdentityResolution(response.message));
        }

        let record: UserRecord = serde_json::from_slice(&response.payload)
            .map_err(|e| RegistryError::IdentityResolution(e.to_string()))?;

        debug!(
            owner = %owner_id,
            channel = %channel,
            chaincode = %self.chaincode,
            "Resolved owner identity"
        );
        Ok(record)
    }
}

// =============================================================================
// IN-MEMORY SERVICE
// =============================================================================

/// Local stand-in for the deployed identity contract.
#[derive(Debug)]
pub struct InMemoryIdentityService {
    chaincode: String,
    function: String,
    /// (channel, owner id) -> stored record payload
    records: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl InMemoryIdentityService {
    pub fn new() -> Self {
        Self::named(DEFAULT_IDENTITY_CHAINCODE, DEFAULT_IDENTITY_FUNCTION)
    }

    /// Service answering to `chaincode` and `function`.
    pub fn named(chaincode: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            chaincode: chaincode.into(),
            function: function.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Register `record` for `owner_id` on `channel`, replacing any earlier one.
    pub fn register(
        &self,
        channel: &str,
        owner_id: &str,
        record: UserRecord,
    ) -> Result<(), LedgerError> {
        let payload = serde_json::to_vec(&record).map_err(|e| LedgerError::Write {
            key: owner_id.to_string(),
            reason: e.to_string(),
        })?;
        self.register_raw(channel, owner_id, payload)
    }

    /// Register a raw payload, which need not be a valid record.
    pub fn register_raw(
        &self,
        channel: &str,
        owner_id: &str,
        payload: Vec<u8>,
    ) -> Result<(), LedgerError> {
        let mut records = self.records.write().map_err(|_| LedgerError::LockPoisoned)?;
        records.insert((channel.to_string(), owner_id.to_string()), payload);
        Ok(())
    }

    fn lookup(&self, channel: &str, owner_id: &str) -> Option<Vec<u8>> {
        let records = self.records.read().ok()?;
        records
            .get(&(channel.to_string(), owner_id.to_string()))
            .cloned()
    }
}

impl Default for InMemoryIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityService for InMemoryIdentityService {
    fn invoke(&self, chaincode: &str, args: &[Vec<u8>], channel: &str) -> Response {
        if chaincode != self.chaincode {
            return Response::error(format!("Chaincode {chaincode} not found on channel {channel}"));
        }

        let function = args
            .first()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .unwrap_or_default();
        if function != self.function {
            return Response::error(format!("Invalid function name: {function}"));
        }

        if args.len() != 2 {
            return Response::error(format!(
                "Incorrect number of arguments. {function} expects 1, got {}",
                args.len().saturating_sub(1)
            ));
        }

        let owner_id = String::from_utf8_lossy(&args[1]);
        match self.lookup(channel, &owner_id) {
            Some(payload) => Response::success(payload),
            None => Response::error(format!("Identity not found: {owner_id}")),
        }
    }
}
