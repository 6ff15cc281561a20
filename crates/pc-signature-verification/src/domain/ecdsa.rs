//! # ECDSA Verification (secp256k1)
//!
//! Pure domain logic for the secp256k1 variant.
//!
//! ## Encodings
//!
//! - Public key: hex of the 33-byte compressed SEC1 point (`02`/`03` prefix)
//! - Signature: hex of the DER-encoded `(r, s)` pair
//!
//! An optional `0x` prefix is tolerated on both.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: S must be in the lower half of the curve order
//! - Uses k256 crate for cryptographic operations

use super::entities::MessageHash;
use super::errors::SignatureError;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};

/// Length of a compressed SEC1 secp256k1 point.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Strip an optional `0x`/`0X` prefix from a hex string.
fn strip_hex_prefix(encoded: &str) -> &str {
    encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded)
}

/// Check whether `encoded` has the shape of a hex compressed secp256k1 key.
///
/// Only the shape is checked (length, hex alphabet, parity prefix); whether
/// the point is on the curve is decided by [`decode_public_key`].
pub fn is_compressed_key_encoding(encoded: &str) -> bool {
    let hex_str = strip_hex_prefix(encoded.trim());
    hex_str.len() == COMPRESSED_KEY_LEN * 2
        && hex_str.bytes().all(|b| b.is_ascii_hexdigit())
        && (hex_str.starts_with("02") || hex_str.starts_with("03"))
}

/// Decode a hex compressed secp256k1 public key.
pub fn decode_public_key(encoded: &str) -> Result<VerifyingKey, SignatureError> {
    let bytes = hex::decode(strip_hex_prefix(encoded.trim()))
        .map_err(|e| SignatureError::MalformedKey(e.to_string()))?;

    if bytes.len() != COMPRESSED_KEY_LEN || !matches!(bytes[0], 0x02 | 0x03) {
        return Err(SignatureError::MalformedKey(format!(
            "expected {COMPRESSED_KEY_LEN}-byte compressed secp256k1 point"
        )));
    }

    VerifyingKey::from_sec1_bytes(&bytes)
        .map_err(|_| SignatureError::MalformedKey("point is not on secp256k1".to_string()))
}

/// Decode a hex DER ECDSA signature.
pub fn decode_signature(encoded: &str) -> Result<Signature, SignatureError> {
    let der = hex::decode(strip_hex_prefix(encoded.trim()))
        .map_err(|e| SignatureError::MalformedSignature(e.to_string()))?;

    Signature::from_der(&der)
        .map_err(|_| SignatureError::MalformedSignature("invalid DER ECDSA signature".to_string()))
}

/// Verify an ECDSA signature over a SHA-256 message hash.
///
/// Security validations performed:
/// 1. S is in the lower half of the curve order
/// 2. The signature verifies against `public_key`
pub fn verify_prehash(
    public_key: &VerifyingKey,
    message_hash: &MessageHash,
    signature: &Signature,
) -> Result<(), SignatureError> {
    // normalize_s() yields Some only when S was high
    if signature.normalize_s().is_some() {
        return Err(SignatureError::MalleableSignature);
    }

    public_key
        .verify_prehash(message_hash, signature)
        .map_err(|_| SignatureError::VerificationFailed)
}

/// Encode a public key the way owner records store it.
pub fn encode_public_key(public_key: &VerifyingKey) -> String {
    hex::encode(public_key.to_encoded_point(true).as_bytes())
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    use crate::domain::canonical::{sha256, transfer_message};
    use k256::ecdsa::signature::hazmat::PrehashSigner;
    use k256::ecdsa::SigningKey;

    /// secp256k1 curve order n
    const SECP256K1_ORDER: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ];

    /// Generate a new keypair; the second element is the hex compressed public key.
    pub fn generate_keypair() -> (SigningKey, String) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let public_key = encode_public_key(signing_key.verifying_key());
        (signing_key, public_key)
    }

    /// Sign arbitrary bytes (SHA-256 prehash), returning hex DER.
    pub fn sign_message(private_key: &SigningKey, message: &[u8]) -> String {
        let signature: Signature = private_key
            .sign_prehash(&sha256(message))
            .expect("signing failed");
        hex::encode(signature.to_der().as_bytes())
    }

    /// Sign the canonical transfer message for `new_owner`.
    pub fn sign_transfer(private_key: &SigningKey, new_owner: &str) -> String {
        sign_message(private_key, &transfer_message(new_owner))
    }

    /// Flip a low-S hex DER signature to its high-S twin: s' = n - s
    pub fn to_high_s(encoded: &str) -> String {
        let signature = decode_signature(encoded).expect("valid signature");
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&signature.to_bytes());

        let mut borrow: i32 = 0;
        for i in (0..32).rev() {
            let diff = (SECP256K1_ORDER[i] as i32) - (bytes[32 + i] as i32) - borrow;
            if diff < 0 {
                bytes[32 + i] = (diff + 256) as u8;
                borrow = 1;
            } else {
                bytes[32 + i] = diff as u8;
                borrow = 0;
            }
        }

        let high = Signature::from_slice(&bytes).expect("n - s is a valid scalar");
        hex::encode(high.to_der().as_bytes())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
