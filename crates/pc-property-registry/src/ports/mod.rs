//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: the invocation API
//! - **Outbound (Driven)**: the ledger and the Identity Service

pub mod inbound;
pub mod outbound;

pub use inbound::PropertyRegistryApi;
pub use outbound::{IdentityResolver, IdentityService, LedgerContext, LedgerError};
