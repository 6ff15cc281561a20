//! Shared test harness: an in-memory ledger "network" driven through the
//! invocation handler exactly as a host would, plus owner key pairs for both
//! signature schemes.

use pc_property_registry::{
    InMemoryIdentityService, InMemoryLedger, InvocationHandler, Property,
    PropertyRegistryService, RegistryConfig, Response, SerializedIdentity,
    ServiceIdentityResolver, UserRecord,
};
use pc_signature_verification::{ecdsa_test_helpers, rsa_test_helpers, SignatureVerificationService};
use std::sync::Arc;

pub const AUTHORITY_ORG: &str = "Org1MSP";
pub const OTHER_ORG: &str = "Org2MSP";
pub const IDENTITY_CHANNEL: &str = "identity-channel";

type Registry = PropertyRegistryService<
    ServiceIdentityResolver<Arc<InMemoryIdentityService>>,
    SignatureVerificationService,
>;

/// Ledger, registry and Identity Service wired together.
pub struct TestNetwork {
    pub ledger: InMemoryLedger,
    pub identities: Arc<InMemoryIdentityService>,
    handler: InvocationHandler<Registry>,
    clock: std::cell::Cell<i64>,
}

impl TestNetwork {
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        let identities = Arc::new(InMemoryIdentityService::named(
            &config.identity_chaincode,
            &config.identity_function,
        ));
        let service = PropertyRegistryService::with_identity_service(
            config,
            identities.clone(),
            SignatureVerificationService::new(),
        );
        Self {
            ledger: InMemoryLedger::new(),
            identities,
            handler: InvocationHandler::new(service),
            clock: std::cell::Cell::new(1_700_000_000),
        }
    }

    /// Network already initialised by `AUTHORITY_ORG`.
    pub fn initialized() -> Self {
        let network = Self::new();
        let response = network.init(AUTHORITY_ORG);
        assert!(response.is_ok(), "init failed: {}", response.message);
        network
    }

    /// Current transaction timestamp; advances by one second per transaction.
    pub fn now(&self) -> i64 {
        self.clock.get()
    }

    pub fn init(&self, org: &str) -> Response {
        self.run(org, |handler, tx| handler.init(tx))
    }

    /// Invoke `function` as `org`; commits only on success.
    pub fn invoke(&self, org: &str, function: &str, args: &[&str]) -> Response {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.run(org, |handler, tx| handler.invoke(tx, function, &args))
    }

    pub fn add_property(&self, org: &str, id: &str, location: &str, owner: &str) -> Response {
        self.invoke(org, "addProperty", &[id, location, owner])
    }

    pub fn transfer(&self, org: &str, id: &str, new_owner: &str, signature: &str) -> Response {
        self.invoke(
            org,
            "transferProperty",
            &[id, new_owner, signature, IDENTITY_CHANNEL],
        )
    }

    /// Parsed record as any caller would read it; `None` when absent.
    pub fn property(&self, id: &str) -> Option<Property> {
        let response = self.invoke(OTHER_ORG, "getProperty", &[id]);
        assert!(response.is_ok(), "getProperty failed: {}", response.message);
        if response.payload.is_empty() {
            return None;
        }
        Some(Property::from_bytes(&response.payload).expect("stored record parses"))
    }

    /// Raw committed bytes for `id`.
    pub fn raw_property(&self, id: &str) -> Option<Vec<u8>> {
        self.ledger
            .committed(&pc_property_registry::property_key(id))
            .expect("ledger readable")
    }

    /// Register `key` as `owner`'s public key on the identity channel.
    pub fn register_owner(&self, owner: &str, key: &OwnerKey) {
        self.identities
            .register(IDENTITY_CHANNEL, owner, UserRecord::new(key.public_key()))
            .expect("identity table writable");
    }

    fn run<F>(&self, org: &str, f: F) -> Response
    where
        F: FnOnce(&InvocationHandler<Registry>, &mut pc_property_registry::LedgerTransaction<'_>) -> Response,
    {
        let timestamp = self.clock.get();
        self.clock.set(timestamp + 1);

        let mut tx = self
            .ledger
            .begin_as(&SerializedIdentity::new(org), timestamp)
            .expect("credential encodes");
        let response = f(&self.handler, &mut tx);
        if response.is_ok() {
            tx.commit().expect("commit succeeds");
        }
        response
    }
}

impl Default for TestNetwork {
    fn default() -> Self {
        Self::new()
    }
}

/// An owner's key pair under either scheme.
pub enum OwnerKey {
    Rsa {
        private_key: rsa::RsaPrivateKey,
        public_key: String,
    },
    Secp256k1 {
        signing_key: k256::ecdsa::SigningKey,
        public_key: String,
    },
}

impl OwnerKey {
    pub fn rsa() -> Self {
        let (private_key, public_key) = rsa_test_helpers::generate_keypair();
        OwnerKey::Rsa {
            private_key,
            public_key,
        }
    }

    pub fn secp256k1() -> Self {
        let (signing_key, public_key) = ecdsa_test_helpers::generate_keypair();
        OwnerKey::Secp256k1 {
            signing_key,
            public_key,
        }
    }

    /// Encoded public key as stored in the user record.
    pub fn public_key(&self) -> String {
        match self {
            OwnerKey::Rsa { public_key, .. } | OwnerKey::Secp256k1 { public_key, .. } => {
                public_key.clone()
            }
        }
    }

    /// Consent signature for a transfer to `new_owner`.
    pub fn sign_transfer(&self, new_owner: &str) -> String {
        match self {
            OwnerKey::Rsa { private_key, .. } => {
                rsa_test_helpers::sign_transfer(private_key, new_owner)
            }
            OwnerKey::Secp256k1 { signing_key, .. } => {
                ecdsa_test_helpers::sign_transfer(signing_key, new_owner)
            }
        }
    }

    /// Signature over arbitrary bytes.
    pub fn sign(&self, message: &[u8]) -> String {
        match self {
            OwnerKey::Rsa { private_key, .. } => rsa_test_helpers::sign_message(private_key, message),
            OwnerKey::Secp256k1 { signing_key, .. } => {
                ecdsa_test_helpers::sign_message(signing_key, message)
            }
        }
    }
}
