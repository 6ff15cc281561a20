//! # Property Registry Service
//!
//! Application service implementing `PropertyRegistryApi`: derives the
//! caller's organisation and the transaction timestamp from the ledger
//! context, then delegates to the domain components.

use crate::adapters::identity::ServiceIdentityResolver;
use crate::config::RegistryConfig;
use crate::domain::authority::{caller_org_id, AuthorityRegistry};
use crate::domain::entities::Property;
use crate::domain::errors::RegistryError;
use crate::domain::registry::PropertyRegistry;
use crate::domain::transfer::{TransferOrchestrator, TransferRequest};
use crate::ports::inbound::PropertyRegistryApi;
use crate::ports::outbound::{IdentityResolver, IdentityService, LedgerContext};
use pc_signature_verification::SignatureVerificationApi;
use tracing::info;

/// Property Registry Service.
///
/// Holds no ledger state; every operation reads and writes through the
/// context it is given.
pub struct PropertyRegistryService<R, V> {
    orchestrator: TransferOrchestrator<R, V>,
}

impl<R: IdentityResolver, V: SignatureVerificationApi> PropertyRegistryService<R, V> {
    /// Create a new service.
    ///
    /// # Arguments
    /// * `config` - Re-initialisation policy and Identity Service target
    /// * `resolver` - Owner id to public-key resolution
    /// * `verifier` - Transfer signature verification
    pub fn new(config: &RegistryConfig, resolver: R, verifier: V) -> Self {
        let registry = PropertyRegistry::new(AuthorityRegistry::new(config.reinit_policy));
        Self {
            orchestrator: TransferOrchestrator::new(registry, resolver, verifier),
        }
    }

    fn registry(&self) -> &PropertyRegistry {
        self.orchestrator.registry()
    }
}

impl<S: IdentityService, V: SignatureVerificationApi>
    PropertyRegistryService<ServiceIdentityResolver<S>, V>
{
    /// Service resolving owners through `identity_service`, targeting the
    /// contract and function named in `config`.
    pub fn with_identity_service(config: &RegistryConfig, identity_service: S, verifier: V) -> Self {
        let resolver = ServiceIdentityResolver::with_target(
            identity_service,
            config.identity_chaincode.clone(),
            config.identity_function.clone(),
        );
        Self::new(config, resolver, verifier)
    }
}

impl<R: IdentityResolver, V: SignatureVerificationApi> PropertyRegistryApi
    for PropertyRegistryService<R, V>
{
    fn initialize(&self, ctx: &mut dyn LedgerContext) -> Result<(), RegistryError> {
        let caller = caller_org_id(&*ctx)?;
        self.registry().authority().initialize(ctx, &caller)
    }

    fn creator_identity(&self, ctx: &dyn LedgerContext) -> Result<String, RegistryError> {
        self.registry().authority().current_authority(ctx)
    }

    fn add_property(
        &self,
        ctx: &mut dyn LedgerContext,
        id: &str,
        location: &str,
        owner: &str,
    ) -> Result<Property, RegistryError> {
        let caller = caller_org_id(&*ctx)?;
        let created_on = ctx.tx_timestamp()?;

        let property = self
            .registry()
            .create(ctx, id, location, owner, &caller, created_on)?;

        info!(
            property_id = %id,
            owner = %owner,
            created_on = created_on,
            "Property created"
        );
        Ok(property)
    }

    fn get_property(
        &self,
        ctx: &dyn LedgerContext,
        id: &str,
    ) -> Result<Option<Vec<u8>>, RegistryError> {
        self.registry().read(ctx, id)
    }

    fn transfer_property(
        &self,
        ctx: &mut dyn LedgerContext,
        request: &TransferRequest,
    ) -> Result<Property, RegistryError> {
        let caller = caller_org_id(&*ctx)?;
        self.orchestrator.transfer(ctx, request, &caller)
    }
}

// =============================================================================
// TESTS
// =============================================================================
