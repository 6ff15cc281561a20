//! # Scheme Selection
//!
//! Decodes an owner's registered public key into one of the two supported
//! schemes. The scheme is inferred from the key encoding and nothing else:
//!
//! 1. 66 hex characters starting `02`/`03` → ECDSA secp256k1
//! 2. PEM text, or base64 of PEM text → RSA PKCS#1 v1.5
//! 3. Anything else → [`SignatureError::UnsupportedKeyEncoding`]
//!
//! The signature is then decoded with the selected scheme's encoding only, so
//! an RSA signature cannot be presented against a secp256k1 key (or the other
//! way round) and be accepted.

use super::canonical::sha256;
use super::entities::{SignatureScheme, VerificationResult};
use super::errors::SignatureError;
use super::{ecdsa, rsa_pkcs1};
use tracing::debug;

/// A decoded owner public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// RSA key from a PKIX PEM document
    Rsa(rsa::RsaPublicKey),
    /// Compressed secp256k1 point
    Secp256k1(k256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// Identify the scheme of an encoded key without fully decoding it.
    pub fn detect_scheme(encoded: &str) -> Option<SignatureScheme> {
        if ecdsa::is_compressed_key_encoding(encoded) {
            Some(SignatureScheme::EcdsaSecp256k1)
        } else if rsa_pkcs1::pem_text(encoded).is_some() {
            Some(SignatureScheme::RsaPkcs1Sha256)
        } else {
            None
        }
    }

    /// Decode an encoded key, selecting the scheme from its encoding.
    pub fn decode(encoded: &str) -> Result<Self, SignatureError> {
        if ecdsa::is_compressed_key_encoding(encoded) {
            debug!(scheme = %SignatureScheme::EcdsaSecp256k1, "Decoding owner public key");
            return ecdsa::decode_public_key(encoded).map(PublicKey::Secp256k1);
        }

        match rsa_pkcs1::pem_text(encoded) {
            Some(pem) => {
                debug!(scheme = %SignatureScheme::RsaPkcs1Sha256, "Decoding owner public key");
                rsa_pkcs1::decode_public_key(&pem).map(PublicKey::Rsa)
            }
            None => Err(SignatureError::UnsupportedKeyEncoding),
        }
    }

    /// The scheme this key belongs to.
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            PublicKey::Rsa(_) => SignatureScheme::RsaPkcs1Sha256,
            PublicKey::Secp256k1(_) => SignatureScheme::EcdsaSecp256k1,
        }
    }

    /// Verify an encoded signature over the SHA-256 hash of `message`.
    ///
    /// # Errors
    /// * `MalformedSignature` - the signature does not decode under this
    ///   key's scheme
    ///
    /// A decodable signature that does not verify is reported as
    /// `Ok(VerificationResult { valid: false, .. })`.
    pub fn verify(
        &self,
        encoded_signature: &str,
        message: &[u8],
    ) -> Result<VerificationResult, SignatureError> {
        let message_hash = sha256(message);

        let outcome = match self {
            PublicKey::Rsa(key) => {
                let signature = rsa_pkcs1::decode_signature(encoded_signature)?;
                rsa_pkcs1::verify_prehash(key, &message_hash, &signature)
            }
            PublicKey::Secp256k1(key) => {
                let signature = ecdsa::decode_signature(encoded_signature)?;
                ecdsa::verify_prehash(key, &message_hash, &signature)
            }
        };

        Ok(match outcome {
            Ok(()) => VerificationResult::valid(self.scheme()),
            Err(e) => VerificationResult::invalid(self.scheme(), e),
        })
    }
}
