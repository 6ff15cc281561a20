//! # Property-Chain Runtime
//!
//! Local host for the property registry: an in-memory ledger, an in-memory
//! Identity Service and a line-oriented JSON protocol.
//!
//! ## Modular Structure
//!
//! - `host` - runs invocations as ledger transactions
//! - `identities` - preloads Identity Service records from a file
//!
//! ## Wire Format
//!
//! Request, one per line:
//! ```text
//! {"function":"addProperty","args":["p1","12 Main St","alice"],
//!  "creator":{"mspId":"Org1MSP"},"timestamp":1700000000}
//! ```
//!
//! Response, one per line:
//! ```text
//! {"status":200,"message":"","payload":""}
//! ```

pub mod host;
pub mod identities;

pub use host::{Host, HostError, HostResponse, Invocation, INIT_FUNCTION};
pub use identities::{load_identities, IdentityDirectory};
