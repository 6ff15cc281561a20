//! # Registry Errors
//!
//! Every failure an invocation can end in. The `Display` text is the single
//! message returned to the caller; no other error detail leaves the
//! dispatcher.

use pc_signature_verification::{SignatureError, SignatureScheme};
use thiserror::Error;

/// Errors that abort a registry invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Wrong number of invocation arguments
    #[error("Incorrect number of arguments. {function} expects {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Unknown invocation function
    #[error("Invalid function name: {0}")]
    UnknownFunction(String),

    /// Caller organisation is not the stored authority
    #[error("You are not authorized: {caller} is not the property authority")]
    Unauthorized { caller: String },

    /// A record already exists at this id
    #[error("Property already exists: {id}")]
    AlreadyExists { id: String },

    /// No record exists at this id
    #[error("Property not found: {id}")]
    NotFound { id: String },

    /// Stored or received bytes could not be parsed
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// A record could not be encoded for storage
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Key or signature encoding could not be decoded
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The Identity Service call failed; carries its message verbatim
    #[error("{0}")]
    IdentityResolution(String),

    /// The signature does not prove the current owner's consent
    #[error("Signature invalid ({scheme})")]
    InvalidSignature { scheme: SignatureScheme },

    /// The ledger rejected a write
    #[error("State write failed: {0}")]
    StateWrite(String),

    /// The ledger could not serve a read
    #[error("State read failed: {0}")]
    StateRead(String),

    /// No authority has been stored yet
    #[error("Identity not yet stored")]
    NotInitialized,

    /// Re-initialisation refused by configuration
    #[error("Property authority already initialized as {authority}")]
    AlreadyInitialized { authority: String },
}

impl RegistryError {
    /// Stable label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::ArgumentCount { .. } => "argument_count",
            RegistryError::UnknownFunction(_) => "unknown_function",
            RegistryError::Unauthorized { .. } => "unauthorized",
            RegistryError::AlreadyExists { .. } => "already_exists",
            RegistryError::NotFound { .. } => "not_found",
            RegistryError::Deserialization(_) => "deserialization",
            RegistryError::Serialization(_) => "serialization",
            RegistryError::MalformedInput(_) => "malformed_input",
            RegistryError::IdentityResolution(_) => "identity_resolution",
            RegistryError::InvalidSignature { .. } => "invalid_signature",
            RegistryError::StateWrite(_) => "state_write",
            RegistryError::StateRead(_) => "state_read",
            RegistryError::NotInitialized => "not_initialized",
            RegistryError::AlreadyInitialized { .. } => "already_initialized",
        }
    }
}

impl From<SignatureError> for RegistryError {
    fn from(e: SignatureError) -> Self {
        // Verification outcomes travel in VerificationResult; only decode
        // failures arrive here.
        RegistryError::MalformedInput(e.to_string())
    }
}
