//! # Transfer Orchestrator
//!
//! Applies an authority-submitted transfer once the current owner's signed
//! consent checks out. The stored record is rewritten only after every check
//! has passed.

use super::entities::Property;
use super::errors::RegistryError;
use super::registry::PropertyRegistry;
use crate::metrics;
use crate::ports::outbound::{IdentityResolver, LedgerContext};
use pc_signature_verification::SignatureVerificationApi;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Arguments of one `transferProperty` invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Property being transferred
    pub property_id: String,
    /// Recipient owner id
    pub new_owner: String,
    /// Current owner's encoded signature over the transfer message
    pub signature: String,
    /// Channel the Identity Service is reachable on
    pub identity_channel: String,
}

impl TransferRequest {
    pub fn new(
        property_id: impl Into<String>,
        new_owner: impl Into<String>,
        signature: impl Into<String>,
        identity_channel: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            new_owner: new_owner.into(),
            signature: signature.into(),
            identity_channel: identity_channel.into(),
        }
    }
}

/// Runs the transfer protocol against a resolver and a verifier.
pub struct TransferOrchestrator<R, V> {
    registry: PropertyRegistry,
    resolver: R,
    verifier: V,
}

impl<R: IdentityResolver, V: SignatureVerificationApi> TransferOrchestrator<R, V> {
    pub fn new(registry: PropertyRegistry, resolver: R, verifier: V) -> Self {
        Self {
            registry,
            resolver,
            verifier,
        }
    }

    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// Transfer `request.property_id` to `request.new_owner`.
    ///
    /// Order of checks:
    /// 1. `caller_org_id` is the authority (`Unauthorized`)
    /// 2. the record exists and parses (`NotFound`, `Deserialization`)
    /// 3. the owner's key resolves (`IdentityResolution`)
    /// 4. the signature decodes (`MalformedInput`) and verifies
    ///    (`InvalidSignature`)
    ///
    /// Then owner and history are updated and the record is written back.
    /// Self-transfer is allowed and appends a duplicate history entry.
    pub fn transfer(
        &self,
        ctx: &mut dyn LedgerContext,
        request: &TransferRequest,
        caller_org_id: &str,
    ) -> Result<Property, RegistryError> {
        let id = request.property_id.as_str();

        self.registry
            .authority()
            .ensure_authority(&*ctx, caller_org_id)?;

        let mut property = self.registry.load(&*ctx, id)?;

        let owner = self
            .resolver
            .resolve(&property.owner, &request.identity_channel)
            .map_err(|e| {
                warn!(
                    property_id = %id,
                    owner = %property.owner,
                    channel = %request.identity_channel,
                    error = %e,
                    "Owner identity resolution failed"
                );
                e
            })?;
        debug!(property_id = %id, owner = %property.owner, "Owner identity resolved");

        let verification = self
            .verifier
            .verify_transfer(&owner.public_key, &request.signature, &request.new_owner)
            .map_err(|e| {
                warn!(property_id = %id, error = %e, "Transfer signature could not be decoded");
                RegistryError::from(e)
            })?;

        if !verification.valid {
            metrics::record_signature_rejection(verification.scheme.as_str());
            warn!(
                property_id = %id,
                scheme = %verification.scheme,
                reason = ?verification.error,
                "Transfer signature rejected"
            );
            return Err(RegistryError::InvalidSignature {
                scheme: verification.scheme,
            });
        }

        let previous_owner = property.owner.clone();
        property.transfer_to(&request.new_owner);
        self.registry.store(ctx, id, &property)?;

        metrics::record_transfer();
        info!(
            property_id = %id,
            from = %previous_owner,
            to = %request.new_owner,
            scheme = %verification.scheme,
            "Property transferred"
        );
        Ok(property)
    }
}
