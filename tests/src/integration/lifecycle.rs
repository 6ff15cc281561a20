//! # Registry Lifecycle
//!
//! init → addProperty → getProperty → transferProperty, run for both owner
//! key schemes independently.

#[cfg(test)]
mod tests {
    use crate::fixtures::{OwnerKey, TestNetwork, AUTHORITY_ORG, OTHER_ORG};
    use pc_property_registry::{Property, RegistryConfig, ReinitPolicy, Response};

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    #[test]
    fn test_init_binds_caller_org() {
        let network = TestNetwork::new();
        assert!(network.init(AUTHORITY_ORG).is_ok());

        let response = network.invoke(OTHER_ORG, "getCreatorIdentity", &[]);
        assert!(response.is_ok());
        assert_eq!(response.payload, AUTHORITY_ORG.as_bytes());
    }

    /// A second init silently replaces the authority under the default policy.
    #[test]
    fn test_reinit_overwrites_authority() {
        let network = TestNetwork::initialized();
        assert!(network.init(OTHER_ORG).is_ok());

        let response = network.invoke(AUTHORITY_ORG, "getCreatorIdentity", &[]);
        assert_eq!(response.payload, OTHER_ORG.as_bytes());

        // The old authority has lost its privileges
        let response = network.add_property(AUTHORITY_ORG, "p1", "loc", "alice");
        assert!(!response.is_ok());
    }

    #[test]
    fn test_reinit_rejected_under_reject_policy() {
        let network = TestNetwork::with_config(&RegistryConfig {
            reinit_policy: ReinitPolicy::Reject,
            ..RegistryConfig::default()
        });
        assert!(network.init(AUTHORITY_ORG).is_ok());

        let response = network.init(OTHER_ORG);
        assert_eq!(response.status, Response::ERROR);

        let response = network.invoke(OTHER_ORG, "getCreatorIdentity", &[]);
        assert_eq!(response.payload, AUTHORITY_ORG.as_bytes());
    }

    #[test]
    fn test_creator_identity_before_init_fails() {
        let network = TestNetwork::new();
        let response = network.invoke(AUTHORITY_ORG, "getCreatorIdentity", &[]);
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "Identity not yet stored");
    }

    // =========================================================================
    // CREATION AND LOOKUP
    // =========================================================================

    #[test]
    fn test_add_then_get_property() {
        let network = TestNetwork::initialized();
        let created_at = network.now();

        let response = network.add_property(AUTHORITY_ORG, "p1", "12 Main St", "alice");
        assert!(response.is_ok(), "{}", response.message);
        assert!(response.payload.is_empty());

        let property = network.property("p1").expect("property stored");
        assert_eq!(property.location, "12 Main St");
        assert_eq!(property.owner, "alice");
        assert_eq!(property.history, vec!["alice".to_string()]);
        assert_eq!(property.created_on, created_at);
    }

    #[test]
    fn test_stored_record_format() {
        let network = TestNetwork::initialized();
        let created_at = network.now();
        network.add_property(AUTHORITY_ORG, "p1", "12 Main St", "alice");

        let raw = network.raw_property("p1").expect("property stored");
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": "12 Main St",
                "owner": "alice",
                "createdOn": created_at,
                "history": ["alice"],
            })
        );
    }

    #[test]
    fn test_get_never_created_property_is_empty() {
        let network = TestNetwork::initialized();
        let response = network.invoke(OTHER_ORG, "getProperty", &["ghost"]);
        assert!(response.is_ok());
        assert!(response.payload.is_empty());
    }

    #[test]
    fn test_duplicate_add_keeps_original() {
        let network = TestNetwork::initialized();
        network.add_property(AUTHORITY_ORG, "p1", "12 Main St", "alice");
        let before = network.raw_property("p1");

        let response = network.add_property(AUTHORITY_ORG, "p1", "99 Other Rd", "mallory");
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "Property already exists: p1");
        assert_eq!(network.raw_property("p1"), before);
    }

    #[test]
    fn test_argument_count_errors() {
        let network = TestNetwork::initialized();

        let response = network.invoke(AUTHORITY_ORG, "addProperty", &["p1", "loc"]);
        assert_eq!(
            response.message,
            "Incorrect number of arguments. addProperty expects 3, got 2"
        );
        let response = network.invoke(AUTHORITY_ORG, "getProperty", &["a", "b"]);
        assert_eq!(response.status, Response::ERROR);
        let response = network.invoke(AUTHORITY_ORG, "transferProperty", &["p1"]);
        assert_eq!(response.status, Response::ERROR);
        let response = network.invoke(AUTHORITY_ORG, "burnProperty", &["p1"]);
        assert_eq!(response.message, "Invalid function name: burnProperty");

        assert_eq!(network.raw_property("p1"), None);
    }

    // =========================================================================
    // TRANSFER
    // =========================================================================

    fn transfer_roundtrip(key: OwnerKey) {
        let network = TestNetwork::initialized();
        network.register_owner("alice", &key);
        network.add_property(AUTHORITY_ORG, "p1", "12 Main St", "alice");
        let created = network.property("p1").unwrap();

        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &key.sign_transfer("bob"));
        assert!(response.is_ok(), "{}", response.message);

        let property = network.property("p1").unwrap();
        assert_eq!(property.owner, "bob");
        assert_eq!(property.history, vec!["alice".to_string(), "bob".to_string()]);
        assert_eq!(property.location, created.location);
        assert_eq!(property.created_on, created.created_on);
    }

    #[test]
    fn test_transfer_with_rsa_owner_key() {
        transfer_roundtrip(OwnerKey::rsa());
    }

    #[test]
    fn test_transfer_with_secp256k1_owner_key() {
        transfer_roundtrip(OwnerKey::secp256k1());
    }

    /// alice → bob → carol: each hop is signed by the owner at that time.
    #[test]
    fn test_chained_transfers_across_schemes() {
        let network = TestNetwork::initialized();
        let alice = OwnerKey::rsa();
        let bob = OwnerKey::secp256k1();
        network.register_owner("alice", &alice);
        network.register_owner("bob", &bob);
        network.add_property(AUTHORITY_ORG, "p1", "Plot 7", "alice");

        assert!(network
            .transfer(AUTHORITY_ORG, "p1", "bob", &alice.sign_transfer("bob"))
            .is_ok());

        // alice no longer owns it; her consent no longer counts
        let response = network.transfer(AUTHORITY_ORG, "p1", "carol", &alice.sign_transfer("carol"));
        assert_eq!(response.status, Response::ERROR);

        assert!(network
            .transfer(AUTHORITY_ORG, "p1", "carol", &bob.sign_transfer("carol"))
            .is_ok());

        let property: Property = network.property("p1").unwrap();
        assert_eq!(property.owner, "carol");
        assert_eq!(property.transfer_count(), 2);
        assert_eq!(
            property.history,
            vec!["alice".to_string(), "bob".to_string(), "carol".to_string()]
        );
    }

    #[test]
    fn test_transfer_of_missing_property() {
        let network = TestNetwork::initialized();
        let response = network.transfer(AUTHORITY_ORG, "ghost", "bob", "00");
        assert_eq!(response.message, "Property not found: ghost");
    }

    #[test]
    fn test_transfer_when_owner_unknown_to_identity_service() {
        let network = TestNetwork::initialized();
        let key = OwnerKey::secp256k1();
        network.add_property(AUTHORITY_ORG, "p1", "loc", "alice");
        let before = network.raw_property("p1");

        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &key.sign_transfer("bob"));
        assert_eq!(response.message, "Identity not found: alice");
        assert_eq!(network.raw_property("p1"), before);
    }

    #[test]
    fn test_transfer_write_failure_leaves_record() {
        let network = TestNetwork::initialized();
        let key = OwnerKey::secp256k1();
        network.register_owner("alice", &key);
        network.add_property(AUTHORITY_ORG, "p1", "loc", "alice");
        let before = network.raw_property("p1");

        network.ledger.set_fail_writes(true);
        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &key.sign_transfer("bob"));
        network.ledger.set_fail_writes(false);

        assert_eq!(response.status, Response::ERROR);
        assert!(response.message.starts_with("State write failed"));
        assert_eq!(network.raw_property("p1"), before);
    }
}
