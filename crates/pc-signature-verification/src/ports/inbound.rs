//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::canonical::transfer_message;
use crate::domain::entities::{SignatureScheme, VerificationResult};
use crate::domain::errors::SignatureError;

/// Primary Signature Verification API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignatureVerificationApi: Send + Sync {
    /// Identify the scheme an encoded public key belongs to.
    fn detect_scheme(&self, encoded_key: &str) -> Result<SignatureScheme, SignatureError>;

    /// Verify an encoded signature against an encoded public key and message.
    ///
    /// # Errors
    /// * `UnsupportedKeyEncoding` / `MalformedKey` - the key does not decode
    /// * `MalformedSignature` - the signature does not decode under the
    ///   key's scheme
    ///
    /// A well-formed signature that does not verify is `Ok` with
    /// `valid == false`.
    fn verify(
        &self,
        encoded_key: &str,
        encoded_signature: &str,
        message: &[u8],
    ) -> Result<VerificationResult, SignatureError>;

    /// Verify an owner's consent to transfer a property to `new_owner`.
    fn verify_transfer(
        &self,
        encoded_key: &str,
        encoded_signature: &str,
        new_owner: &str,
    ) -> Result<VerificationResult, SignatureError> {
        self.verify(encoded_key, encoded_signature, &transfer_message(new_owner))
    }
}
