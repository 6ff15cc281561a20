//! # Property Registry
//!
//! Authority-gated creation and plain lookup of property records stored
//! under `property_<id>`.

use super::authority::AuthorityRegistry;
use super::entities::{property_key, Property};
use super::errors::RegistryError;
use crate::ports::outbound::LedgerContext;
use tracing::debug;

/// Creates, reads and rewrites property records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyRegistry {
    authority: AuthorityRegistry,
}

impl PropertyRegistry {
    pub fn new(authority: AuthorityRegistry) -> Self {
        Self { authority }
    }

    pub fn authority(&self) -> &AuthorityRegistry {
        &self.authority
    }

    /// Create a record for `id` owned by `owner`, with history `[owner]`.
    ///
    /// Checks run in order: caller is the authority, then the id is unused.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the authority
    /// * `AlreadyExists` - a record is stored under `id`
    /// * `StateWrite` - the ledger rejected the write
    pub fn create(
        &self,
        ctx: &mut dyn LedgerContext,
        id: &str,
        location: &str,
        owner: &str,
        caller_org_id: &str,
        created_on: i64,
    ) -> Result<Property, RegistryError> {
        self.authority.ensure_authority(&*ctx, caller_org_id)?;

        let key = property_key(id);
        if ctx.get_state(&key)?.is_some() {
            return Err(RegistryError::AlreadyExists { id: id.to_string() });
        }

        let property = Property::new(location, owner, created_on);
        ctx.put_state(&key, property.to_bytes()?)?;
        Ok(property)
    }

    /// Stored bytes for `id`, unparsed. `None` when absent.
    pub fn read(&self, ctx: &dyn LedgerContext, id: &str) -> Result<Option<Vec<u8>>, RegistryError> {
        let bytes = ctx.get_state(&property_key(id))?;
        debug!(property_id = %id, found = bytes.is_some(), "Property read");
        Ok(bytes)
    }

    /// Load and parse the record for `id`.
    ///
    /// # Errors
    /// * `NotFound` - nothing stored under `id`
    /// * `Deserialization` - stored bytes are not a valid record
    pub fn load(&self, ctx: &dyn LedgerContext, id: &str) -> Result<Property, RegistryError> {
        match self.read(ctx, id)? {
            Some(bytes) => Property::from_bytes(&bytes),
            None => Err(RegistryError::NotFound { id: id.to_string() }),
        }
    }

    /// Overwrite the record stored for `id`.
    pub fn store(
        &self,
        ctx: &mut dyn LedgerContext,
        id: &str,
        property: &Property,
    ) -> Result<(), RegistryError> {
        ctx.put_state(&property_key(id), property.to_bytes()?)?;
        Ok(())
    }
}
