//! # pc-property-registry
//!
//! Permissioned property registry running on top of a transactional
//! key-value ledger.
//!
//! ## Role in System
//!
//! - **Authority Registry**: binds the deploying organisation as sole authority
//! - **Property Registry**: authority-gated creation and lookup of records
//! - **Transfer Orchestrator**: owner-consented, authority-submitted transfers
//!
//! ## Transfer Flow
//!
//! ```text
//! transferProperty(id, newOwner, sig, channel)
//!        │
//!        ├─ 1. caller org == authority ?          ── UnauthorizedError
//!        ├─ 2. load property_<id>                 ── NotFound / Deserialization
//!        ├─ 3. Identity Service: getIdentity(owner) on channel
//!        │                                        ── IdentityResolutionError
//!        ├─ 4. verify sig over {"action":"transfer","to":newOwner}
//!        │                                        ── InvalidSignature / MalformedInput
//!        └─ owner := newOwner; history.push(newOwner); put property_<id>
//! ```
//!
//! Any failure before the final write leaves the stored record untouched.
//!
//! ## Persisted Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `propertyAuthority` | raw authority org id bytes |
//! | `property_<id>` | JSON `{location, owner, createdOn, history}` |

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryIdentityService, InMemoryLedger, LedgerTransaction, ServiceIdentityResolver};
pub use config::{ConfigError, RegistryConfig, ReinitPolicy};
pub use domain::{
    caller_org_id, property_key, AuthorityRegistry, Property, PropertyRegistry, RegistryError,
    Response, SerializedIdentity, TransferOrchestrator, TransferRequest, UserRecord, AUTHORITY_KEY,
    PROPERTY_KEY_PREFIX,
};
pub use ipc::{functions, InvocationHandler};
pub use ports::{IdentityResolver, IdentityService, LedgerContext, LedgerError, PropertyRegistryApi};
pub use service::PropertyRegistryService;
