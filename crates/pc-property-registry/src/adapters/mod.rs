//! # Adapters Layer
//!
//! - `memory_ledger`: transactional in-memory `LedgerContext`
//! - `identity`: Identity Service client and in-memory stand-in

pub mod identity;
pub mod memory_ledger;

pub use identity::{InMemoryIdentityService, ServiceIdentityResolver};
pub use memory_ledger::{InMemoryLedger, LedgerTransaction};
