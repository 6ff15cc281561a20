//! # Signature Errors
//!
//! Error types for signature verification operations.

use thiserror::Error;

/// Errors that can occur during signature verification.
///
/// Decode failures (`UnsupportedKeyEncoding`, `MalformedKey`,
/// `MalformedSignature`) are kept apart from verification failures so callers
/// can report malformed input differently from a signature that simply does
/// not match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The public key encoding matches neither supported scheme
    #[error("Unsupported public key encoding")]
    UnsupportedKeyEncoding,

    /// The public key was recognised but could not be decoded
    #[error("Public key invalid: {0}")]
    MalformedKey(String),

    /// The signature could not be decoded for the selected scheme
    #[error("Signature encoding invalid: {0}")]
    MalformedSignature(String),

    /// Signature verification failed (signature doesn't match message/key)
    #[error("Signature verification failed")]
    VerificationFailed,

    /// Signature has high S value (secp256k1 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,
}

impl SignatureError {
    /// True for errors caused by undecodable key or signature input.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            SignatureError::UnsupportedKeyEncoding
                | SignatureError::MalformedKey(_)
                | SignatureError::MalformedSignature(_)
        )
    }
}
