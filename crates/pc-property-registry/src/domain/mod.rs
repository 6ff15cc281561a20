//! # Domain Layer
//!
//! Registry rules with no I/O of their own; all state goes through the
//! `LedgerContext` port.

pub mod authority;
pub mod entities;
pub mod errors;
pub mod registry;
pub mod transfer;

pub use authority::{caller_org_id, AuthorityRegistry};
pub use entities::*;
pub use errors::*;
pub use registry::PropertyRegistry;
pub use transfer::{TransferOrchestrator, TransferRequest};
