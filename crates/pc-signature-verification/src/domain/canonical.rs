//! # Canonical Transfer Message
//!
//! Builds the exact byte sequence an owner signs to consent to a transfer:
//!
//! ```text
//! {"action":"transfer","to":"<newOwner>"}
//! ```
//!
//! Compact JSON, `action` first, no other fields. The SHA-256 digest of these
//! bytes is what both signature schemes sign and verify.
//!
//! ## Replay
//!
//! The message does not bind the property id, a timestamp or a nonce. A
//! signature authorising "transfer to X" is therefore valid for any property
//! currently owned by the signer's key and can be replayed. Existing client
//! signatures depend on this exact shape.

use super::entities::MessageHash;
use sha2::{Digest, Sha256};

/// Literal value of the `action` field.
pub const TRANSFER_ACTION: &str = "transfer";

/// Build the canonical transfer message for `new_owner`.
///
/// The owner id is emitted as a JSON string literal, so ids containing quotes
/// or backslashes are escaped rather than corrupting the object. For such ids
/// the bytes differ from a signer that splices the raw id between the quotes,
/// and that signer's signature will not verify. Ids without characters that
/// need escaping produce identical bytes either way.
pub fn transfer_message(new_owner: &str) -> Vec<u8> {
    let to = serde_json::Value::from(new_owner);
    format!("{{\"action\":\"{TRANSFER_ACTION}\",\"to\":{to}}}").into_bytes()
}

/// SHA-256 digest of the canonical transfer message for `new_owner`.
pub fn transfer_digest(new_owner: &str) -> MessageHash {
    sha256(&transfer_message(new_owner))
}

/// SHA-256 hash function.
pub fn sha256(data: &[u8]) -> MessageHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
