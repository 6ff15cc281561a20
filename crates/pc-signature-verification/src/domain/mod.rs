//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod canonical;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod rsa_pkcs1;
pub mod scheme;
