//! # Inbound Ports (Driving Ports / API)
//!
//! The operations an invocation can select. Each call runs to completion
//! against the supplied ledger context.

use crate::domain::entities::Property;
use crate::domain::errors::RegistryError;
use crate::domain::transfer::TransferRequest;
use crate::ports::outbound::LedgerContext;

/// Primary Property Registry API.
pub trait PropertyRegistryApi {
    /// Bind the caller's organisation as the property authority.
    fn initialize(&self, ctx: &mut dyn LedgerContext) -> Result<(), RegistryError>;

    /// The stored authority org id.
    ///
    /// # Errors
    /// * `NotInitialized` - no authority stored yet
    fn creator_identity(&self, ctx: &dyn LedgerContext) -> Result<String, RegistryError>;

    /// Register a new property. Authority only.
    fn add_property(
        &self,
        ctx: &mut dyn LedgerContext,
        id: &str,
        location: &str,
        owner: &str,
    ) -> Result<Property, RegistryError>;

    /// Stored record bytes for `id`; `None` when never created.
    fn get_property(
        &self,
        ctx: &dyn LedgerContext,
        id: &str,
    ) -> Result<Option<Vec<u8>>, RegistryError>;

    /// Transfer a property with the current owner's signed consent.
    /// Authority only.
    fn transfer_property(
        &self,
        ctx: &mut dyn LedgerContext,
        request: &TransferRequest,
    ) -> Result<Property, RegistryError>;
}
