//! # Signature Verification Subsystem
//!
//! Verifies that the current owner of a property consented to a transfer.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the inbound interface
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Supported Schemes
//!
//! | Scheme | Public key encoding | Signature encoding |
//! |--------|---------------------|--------------------|
//! | RSA PKCS#1 v1.5 / SHA-256 | PEM (PKIX), raw or base64-wrapped | base64 |
//! | ECDSA secp256k1 / SHA-256 | hex, compressed SEC1 point | hex DER |
//!
//! The scheme is chosen from the public key encoding alone. A signature made
//! under one scheme never verifies under the other.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: high-S secp256k1 signatures are rejected
//! - **Replay**: the canonical transfer message carries neither the property id
//!   nor a nonce, so a consent signature for "transfer to X" is valid for every
//!   property the signer currently owns. See [`domain::canonical`].

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::canonical::{sha256, transfer_digest, transfer_message, TRANSFER_ACTION};
pub use domain::entities::{MessageHash, SignatureScheme, VerificationResult};
pub use domain::errors::SignatureError;
pub use domain::scheme::PublicKey;
pub use ports::inbound::SignatureVerificationApi;
pub use service::SignatureVerificationService;

#[cfg(any(test, feature = "test-helpers"))]
pub use domain::{ecdsa::test_helpers as ecdsa_test_helpers, rsa_pkcs1::test_helpers as rsa_test_helpers};
