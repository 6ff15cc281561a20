//! # Signature Verification Service
//!
//! Application service layer that implements the `SignatureVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`SignatureVerificationApi`)
//! - Delegates cryptographic operations to domain layer

use crate::domain::entities::{SignatureScheme, VerificationResult};
use crate::domain::errors::SignatureError;
use crate::domain::scheme::PublicKey;
use crate::ports::inbound::SignatureVerificationApi;
use tracing::debug;

/// Signature Verification Service.
///
/// Stateless; every call decodes the key afresh because owner keys are
/// resolved per transfer and may rotate between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerificationService;

impl SignatureVerificationService {
    /// Create a new signature verification service.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerificationApi for SignatureVerificationService {
    fn detect_scheme(&self, encoded_key: &str) -> Result<SignatureScheme, SignatureError> {
        PublicKey::detect_scheme(encoded_key).ok_or(SignatureError::UnsupportedKeyEncoding)
    }

    fn verify(
        &self,
        encoded_key: &str,
        encoded_signature: &str,
        message: &[u8],
    ) -> Result<VerificationResult, SignatureError> {
        let public_key = PublicKey::decode(encoded_key)?;
        let result = public_key.verify(encoded_signature, message)?;

        debug!(
            scheme = %result.scheme,
            valid = result.valid,
            "Signature verification completed"
        );

        Ok(result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
