//! # Domain Entities
//!
//! Core data structures for signature verification.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SHA-256 digest of a canonical message.
pub type MessageHash = [u8; 32];

/// The two key/signature schemes a registered owner key may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureScheme {
    /// PEM/PKIX RSA key, base64 PKCS#1 v1.5 signature over SHA-256
    RsaPkcs1Sha256,
    /// Hex compressed secp256k1 key, hex DER ECDSA signature over SHA-256
    EcdsaSecp256k1,
}

impl SignatureScheme {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::RsaPkcs1Sha256 => "rsa-pkcs1-sha256",
            SignatureScheme::EcdsaSecp256k1 => "ecdsa-secp256k1",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of signature verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the signature is valid
    pub valid: bool,
    /// Scheme selected from the public key encoding
    pub scheme: SignatureScheme,
    /// Error details (if verification failed)
    pub error: Option<SignatureError>,
}

impl VerificationResult {
    /// Create a successful verification result.
    pub fn valid(scheme: SignatureScheme) -> Self {
        Self {
            valid: true,
            scheme,
            error: None,
        }
    }

    /// Create a failed verification result.
    pub fn invalid(scheme: SignatureScheme, error: SignatureError) -> Self {
        Self {
            valid: false,
            scheme,
            error: Some(error),
        }
    }
}
