//! # RSA Verification (PKCS#1 v1.5, SHA-256)
//!
//! Pure domain logic for the RSA variant.
//!
//! ## Encodings
//!
//! - Public key: PEM-encoded PKIX `SubjectPublicKeyInfo`. Owner records may
//!   store the PEM text directly or wrapped in standard base64.
//! - Signature: standard base64 of the raw PKCS#1 v1.5 signature block.

use super::entities::MessageHash;
use super::errors::SignatureError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::pkcs8::DecodePublicKey;
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::Sha256;

const PEM_PREFIX: &str = "-----BEGIN";

/// Recover PEM text from an encoded key, unwrapping base64 if needed.
///
/// Returns `None` when the input is neither PEM nor base64-wrapped PEM.
pub fn pem_text(encoded: &str) -> Option<String> {
    let trimmed = encoded.trim();
    if trimmed.starts_with(PEM_PREFIX) {
        return Some(trimmed.to_string());
    }

    let decoded = STANDARD.decode(trimmed).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    text.trim_start().starts_with(PEM_PREFIX).then_some(text)
}

/// Decode a PEM PKIX RSA public key.
///
/// PKIX keys for other algorithms are rejected here.
pub fn decode_public_key(pem: &str) -> Result<RsaPublicKey, SignatureError> {
    RsaPublicKey::from_public_key_pem(pem.trim())
        .map_err(|e| SignatureError::MalformedKey(e.to_string()))
}

/// Decode a base64 RSA signature.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, SignatureError> {
    let signature = STANDARD
        .decode(encoded.trim())
        .map_err(|e| SignatureError::MalformedSignature(e.to_string()))?;

    if signature.is_empty() {
        return Err(SignatureError::MalformedSignature(
            "empty signature".to_string(),
        ));
    }

    Ok(signature)
}

/// Verify a PKCS#1 v1.5 signature over a SHA-256 message hash.
pub fn verify_prehash(
    public_key: &RsaPublicKey,
    message_hash: &MessageHash,
    signature: &[u8],
) -> Result<(), SignatureError> {
    public_key
        .verify(Pkcs1v15Sign::new::<Sha256>(), message_hash, signature)
        .map_err(|_| SignatureError::VerificationFailed)
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    use crate::domain::canonical::{sha256, transfer_message};
    use rsa::pkcs8::{EncodePublicKey, LineEnding};
    use rsa::RsaPrivateKey;

    /// Modulus size for generated test keys; small to keep debug builds fast.
    pub const TEST_KEY_BITS: usize = 1024;

    /// PEM text of the public half of `private_key`.
    pub fn public_key_pem(private_key: &RsaPrivateKey) -> String {
        RsaPublicKey::from(private_key)
            .to_public_key_pem(LineEnding::LF)
            .expect("PEM encoding failed")
    }

    /// Generate a new keypair; the second element is the base64-wrapped PEM
    /// public key, the form owner records store.
    pub fn generate_keypair() -> (RsaPrivateKey, String) {
        let private_key =
            RsaPrivateKey::new(&mut rand::thread_rng(), TEST_KEY_BITS).expect("keygen failed");
        let public_key = STANDARD.encode(public_key_pem(&private_key));
        (private_key, public_key)
    }

    /// Sign arbitrary bytes (SHA-256 prehash), returning base64.
    pub fn sign_message(private_key: &RsaPrivateKey, message: &[u8]) -> String {
        let signature = private_key
            .sign(Pkcs1v15Sign::new::<Sha256>(), &sha256(message))
            .expect("signing failed");
        STANDARD.encode(signature)
    }

    /// Sign the canonical transfer message for `new_owner`.
    pub fn sign_transfer(private_key: &RsaPrivateKey, new_owner: &str) -> String {
        sign_message(private_key, &transfer_message(new_owner))
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
