//! # Authority Registry
//!
//! Holds the single organisation id allowed to create properties and submit
//! transfers. It is captured from the caller credential on initialisation and
//! stored raw under `propertyAuthority`.

use super::entities::{SerializedIdentity, AUTHORITY_KEY};
use super::errors::RegistryError;
use crate::config::ReinitPolicy;
use crate::ports::outbound::LedgerContext;
use tracing::{info, warn};

/// Organisation id of the caller submitting the current transaction.
pub fn caller_org_id(ctx: &dyn LedgerContext) -> Result<String, RegistryError> {
    let credential = ctx.creator()?;
    Ok(SerializedIdentity::from_bytes(&credential)?.msp_id)
}

/// Reads and writes the stored authority.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorityRegistry {
    policy: ReinitPolicy,
}

impl AuthorityRegistry {
    /// Create an authority registry applying `policy` to repeated
    /// initialisation.
    pub fn new(policy: ReinitPolicy) -> Self {
        Self { policy }
    }

    /// The configured re-initialisation policy.
    pub fn policy(&self) -> ReinitPolicy {
        self.policy
    }

    /// Store `caller_org_id` as the authority.
    ///
    /// With `ReinitPolicy::Overwrite` a second call replaces the stored value
    /// without complaint. With `ReinitPolicy::Reject` it fails with
    /// `AlreadyInitialized` and writes nothing.
    pub fn initialize(
        &self,
        ctx: &mut dyn LedgerContext,
        caller_org_id: &str,
    ) -> Result<(), RegistryError> {
        if let Some(existing) = self.stored_authority(&*ctx)? {
            match self.policy {
                ReinitPolicy::Reject => {
                    warn!(
                        authority = %existing,
                        caller = %caller_org_id,
                        "Re-initialization rejected"
                    );
                    return Err(RegistryError::AlreadyInitialized {
                        authority: existing,
                    });
                }
                ReinitPolicy::Overwrite => {
                    warn!(
                        previous = %existing,
                        caller = %caller_org_id,
                        "Overwriting existing property authority"
                    );
                }
            }
        }

        ctx.put_state(AUTHORITY_KEY, caller_org_id.as_bytes().to_vec())?;
        info!(authority = %caller_org_id, "Property authority initialized");
        Ok(())
    }

    /// The stored authority.
    ///
    /// # Errors
    /// * `NotInitialized` - nothing stored yet
    pub fn current_authority(&self, ctx: &dyn LedgerContext) -> Result<String, RegistryError> {
        self.stored_authority(ctx)?
            .ok_or(RegistryError::NotInitialized)
    }

    /// Whether an authority has been stored.
    pub fn is_initialized(&self, ctx: &dyn LedgerContext) -> Result<bool, RegistryError> {
        Ok(self.stored_authority(ctx)?.is_some())
    }

    /// Require `caller_org_id` to be the stored authority.
    ///
    /// An uninitialised registry has no authority, so every caller is
    /// unauthorised (including one presenting an empty org id).
    pub fn ensure_authority(
        &self,
        ctx: &dyn LedgerContext,
        caller_org_id: &str,
    ) -> Result<(), RegistryError> {
        match self.stored_authority(ctx)? {
            Some(authority) if authority == caller_org_id => Ok(()),
            _ => {
                warn!(caller = %caller_org_id, "Caller is not the property authority");
                Err(RegistryError::Unauthorized {
                    caller: caller_org_id.to_string(),
                })
            }
        }
    }

    fn stored_authority(&self, ctx: &dyn LedgerContext) -> Result<Option<String>, RegistryError> {
        match ctx.get_state(AUTHORITY_KEY)? {
            Some(bytes) if !bytes.is_empty() => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| RegistryError::Deserialization(format!("authority id: {e}"))),
            _ => Ok(None),
        }
    }
}
