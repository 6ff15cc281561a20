//! Identity Service preloading.
//!
//! File format: channel name to owner id to user record.
//!
//! ```json
//! {
//!   "identity-channel": {
//!     "alice": { "publicKey": "02…", "metadataHash": "", "permissions": [] }
//!   }
//! }
//! ```

use crate::host::HostError;
use pc_property_registry::{InMemoryIdentityService, RegistryConfig, UserRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parsed identities file.
pub type IdentityDirectory = BTreeMap<String, BTreeMap<String, UserRecord>>;

/// Build an Identity Service answering under the names in `config`,
/// preloaded from `path` when given.
pub fn load_identities(
    config: &RegistryConfig,
    path: Option<&Path>,
) -> Result<InMemoryIdentityService, HostError> {
    let service =
        InMemoryIdentityService::named(&config.identity_chaincode, &config.identity_function);

    let Some(path) = path else {
        return Ok(service);
    };

    let identities_error = |reason: String| HostError::Identities {
        path: path.display().to_string(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|e| identities_error(e.to_string()))?;
    let directory: IdentityDirectory =
        serde_json::from_str(&text).map_err(|e| identities_error(e.to_string()))?;

    let mut loaded = 0usize;
    for (channel, users) in directory {
        for (owner_id, record) in users {
            service.register(&channel, &owner_id, record)?;
            loaded += 1;
        }
    }
    info!(path = %path.display(), records = loaded, "Identity records loaded");

    Ok(service)
}
