//! Invocation host.
//!
//! Each invocation runs in its own ledger transaction, committed only when
//! the registry answers with success. A failed invocation leaves no trace
//! in the ledger.

use pc_property_registry::{
    InMemoryIdentityService, InMemoryLedger, InvocationHandler, LedgerError,
    PropertyRegistryService, RegistryConfig, RegistryError, Response, SerializedIdentity,
    ServiceIdentityResolver,
};
use pc_signature_verification::SignatureVerificationService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Function name routed to deployment-time initialisation.
pub const INIT_FUNCTION: &str = "init";

/// Host errors. These never reach the ledger; the caller sees them as an
/// error response.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(#[from] serde_json::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Cannot load identities from {path}: {reason}")]
    Identities { path: String, reason: String },
}

/// One request line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub creator: SerializedIdentity,
    /// Transaction timestamp, whole seconds
    #[serde(default)]
    pub timestamp: i64,
}

/// One response line. The payload is rendered as text; every payload the
/// registry produces is UTF-8.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostResponse {
    pub status: i32,
    pub message: String,
    pub payload: String,
}

impl From<Response> for HostResponse {
    fn from(response: Response) -> Self {
        Self {
            status: response.status,
            message: response.message,
            payload: String::from_utf8_lossy(&response.payload).into_owned(),
        }
    }
}

type Registry = PropertyRegistryService<
    ServiceIdentityResolver<Arc<InMemoryIdentityService>>,
    SignatureVerificationService,
>;

/// In-memory ledger plus the registry handler.
pub struct Host {
    ledger: InMemoryLedger,
    handler: InvocationHandler<Registry>,
}

impl Host {
    pub fn new(config: &RegistryConfig, identities: Arc<InMemoryIdentityService>) -> Self {
        let service = PropertyRegistryService::with_identity_service(
            config,
            identities,
            SignatureVerificationService::new(),
        );
        Self {
            ledger: InMemoryLedger::new(),
            handler: InvocationHandler::new(service),
        }
    }

    pub fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }

    /// Run one invocation in its own transaction.
    pub fn execute(&self, invocation: &Invocation) -> Result<Response, HostError> {
        let mut tx = self
            .ledger
            .begin_as(&invocation.creator, invocation.timestamp)?;

        let response = if invocation.function == INIT_FUNCTION {
            self.handler.init(&mut tx)
        } else {
            self.handler
                .invoke(&mut tx, &invocation.function, &invocation.args)
        };

        if response.is_ok() {
            tx.commit()?;
            debug!(function = %invocation.function, "Transaction committed");
        } else {
            debug!(function = %invocation.function, "Transaction discarded");
        }
        Ok(response)
    }

    /// Parse and run one request line.
    pub fn process_line(&self, line: &str) -> HostResponse {
        let outcome = serde_json::from_str::<Invocation>(line)
            .map_err(HostError::from)
            .and_then(|invocation| self.execute(&invocation));

        match outcome {
            Ok(response) => response.into(),
            Err(e) => {
                info!(error = %e, "Invocation rejected by host");
                Response::error(e.to_string()).into()
            }
        }
    }
}
