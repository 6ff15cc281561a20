//! # Transfer Consent Attacks
//!
//! Forged, malleated, cross-scheme and replayed owner signatures.

#[cfg(test)]
mod tests {
    use crate::fixtures::{OwnerKey, TestNetwork, AUTHORITY_ORG};
    use pc_signature_verification::ecdsa_test_helpers;
    use pc_property_registry::Response;

    fn network_with_owner(key: &OwnerKey) -> TestNetwork {
        let network = TestNetwork::initialized();
        network.register_owner("alice", key);
        network.add_property(AUTHORITY_ORG, "p1", "12 Main St", "alice");
        network
    }

    fn assert_rejected_unchanged(network: &TestNetwork, response: &Response, before: &Option<Vec<u8>>) {
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(&network.raw_property("p1"), before);
    }

    #[test]
    fn test_signature_for_other_recipient_rejected() {
        for key in [OwnerKey::rsa(), OwnerKey::secp256k1()] {
            let network = network_with_owner(&key);
            let before = network.raw_property("p1");

            let response =
                network.transfer(AUTHORITY_ORG, "p1", "mallory", &key.sign_transfer("bob"));

            assert!(response.message.starts_with("Signature invalid"));
            assert_rejected_unchanged(&network, &response, &before);
        }
    }

    #[test]
    fn test_signature_by_non_owner_rejected() {
        let alice = OwnerKey::secp256k1();
        let mallory = OwnerKey::secp256k1();
        let network = network_with_owner(&alice);
        let before = network.raw_property("p1");

        let response =
            network.transfer(AUTHORITY_ORG, "p1", "mallory", &mallory.sign_transfer("mallory"));

        assert_eq!(response.message, "Signature invalid (ecdsa-secp256k1)");
        assert_rejected_unchanged(&network, &response, &before);
    }

    /// A signature over a differently formatted message does not count.
    #[test]
    fn test_signature_over_noncanonical_message_rejected() {
        let alice = OwnerKey::rsa();
        let network = network_with_owner(&alice);
        let before = network.raw_property("p1");

        let sloppy = alice.sign(br#"{"to":"bob","action":"transfer"}"#);
        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &sloppy);

        assert_eq!(response.message, "Signature invalid (rsa-pkcs1-sha256)");
        assert_rejected_unchanged(&network, &response, &before);
    }

    #[test]
    fn test_high_s_signature_rejected() {
        let alice = OwnerKey::secp256k1();
        let network = network_with_owner(&alice);
        let before = network.raw_property("p1");

        let malleated = ecdsa_test_helpers::to_high_s(&alice.sign_transfer("bob"));
        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &malleated);

        assert_rejected_unchanged(&network, &response, &before);
    }

    /// A signature produced under one scheme never verifies under the other,
    /// even when both keys belong to the same person.
    #[test]
    fn test_cross_scheme_signature_rejected() {
        let rsa_key = OwnerKey::rsa();
        let ec_key = OwnerKey::secp256k1();

        let network = network_with_owner(&rsa_key);
        let before = network.raw_property("p1");
        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &ec_key.sign_transfer("bob"));
        assert_rejected_unchanged(&network, &response, &before);

        let network = network_with_owner(&ec_key);
        let before = network.raw_property("p1");
        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", &rsa_key.sign_transfer("bob"));
        assert_rejected_unchanged(&network, &response, &before);
    }

    #[test]
    fn test_garbage_signature_is_malformed_input() {
        for key in [OwnerKey::rsa(), OwnerKey::secp256k1()] {
            let network = network_with_owner(&key);
            let before = network.raw_property("p1");

            let response = network.transfer(AUTHORITY_ORG, "p1", "bob", "%%%");

            assert!(response.message.starts_with("Malformed input"), "{}", response.message);
            assert_rejected_unchanged(&network, &response, &before);
        }
    }

    #[test]
    fn test_unsupported_owner_key_is_malformed_input() {
        let network = TestNetwork::initialized();
        network.identities.register(
            crate::fixtures::IDENTITY_CHANNEL,
            "alice",
            pc_property_registry::UserRecord::new("not-a-key"),
        )
        .unwrap();
        network.add_property(AUTHORITY_ORG, "p1", "loc", "alice");

        let response = network.transfer(AUTHORITY_ORG, "p1", "bob", "00");
        assert!(response.message.starts_with("Malformed input"));
    }

    /// The consent message names only the recipient, so one signature moves
    /// every property the signer owns to that recipient. This pins the
    /// current replay exposure.
    #[test]
    fn test_consent_replays_across_properties() {
        let alice = OwnerKey::secp256k1();
        let network = network_with_owner(&alice);
        network.add_property(AUTHORITY_ORG, "p2", "34 Side St", "alice");

        let consent = alice.sign_transfer("bob");
        assert!(network.transfer(AUTHORITY_ORG, "p1", "bob", &consent).is_ok());
        assert!(network.transfer(AUTHORITY_ORG, "p2", "bob", &consent).is_ok());

        assert_eq!(network.property("p2").unwrap().owner, "bob");
    }
}
