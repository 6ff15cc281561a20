//! # Authority Gate Attacks
//!
//! Non-authority organisations trying to create or move properties, and an
//! empty org id trying to slip past an uninitialised registry.

#[cfg(test)]
mod tests {
    use crate::fixtures::{OwnerKey, TestNetwork, AUTHORITY_ORG, OTHER_ORG};
    use pc_property_registry::Response;

    #[test]
    fn test_non_authority_cannot_create() {
        let network = TestNetwork::initialized();
        let response = network.add_property(OTHER_ORG, "p1", "loc", "mallory");

        assert_eq!(response.status, Response::ERROR);
        assert!(response.message.starts_with("You are not authorized"));
        assert_eq!(network.raw_property("p1"), None);
    }

    /// Even a perfectly valid owner signature needs the authority to submit it.
    #[test]
    fn test_owner_consent_without_authority_is_refused() {
        let network = TestNetwork::initialized();
        let alice = OwnerKey::secp256k1();
        network.register_owner("alice", &alice);
        network.add_property(AUTHORITY_ORG, "p1", "loc", "alice");
        let before = network.raw_property("p1");

        let response = network.transfer(OTHER_ORG, "p1", "bob", &alice.sign_transfer("bob"));

        assert!(response.message.starts_with("You are not authorized"));
        assert_eq!(network.raw_property("p1"), before);
    }

    /// Before initialisation nobody is the authority, including a caller
    /// whose credential carries an empty org id.
    #[test]
    fn test_empty_org_before_init_cannot_create() {
        let network = TestNetwork::new();

        let response = network.add_property("", "p1", "loc", "mallory");
        assert_eq!(response.status, Response::ERROR);
        assert!(response.message.starts_with("You are not authorized"));

        let response = network.add_property(AUTHORITY_ORG, "p1", "loc", "mallory");
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(network.raw_property("p1"), None);
    }

    /// Authorisation is decided before existence, so probing ids as an
    /// outsider reveals nothing.
    #[test]
    fn test_outsider_cannot_probe_existence_via_errors() {
        let network = TestNetwork::initialized();
        network.add_property(AUTHORITY_ORG, "exists", "loc", "alice");

        let existing = network.add_property(OTHER_ORG, "exists", "loc", "x");
        let missing = network.add_property(OTHER_ORG, "missing", "loc", "x");
        assert_eq!(existing.message, missing.message);

        let existing = network.transfer(OTHER_ORG, "exists", "x", "00");
        let missing = network.transfer(OTHER_ORG, "missing", "x", "00");
        assert_eq!(existing.message, missing.message);
    }
}
