//! # Invocation Handler
//!
//! Entry point for the ledger host: selects an operation by function name,
//! enforces argument counts and turns every outcome into a `Response`.
//!
//! ## Functions
//!
//! | Function | Args | Success payload |
//! |----------|------|-----------------|
//! | `getCreatorIdentity` | ignored | authority org id bytes |
//! | `addProperty` | `id, location, owner` | empty |
//! | `getProperty` | `id` | stored record bytes (empty if absent) |
//! | `transferProperty` | `id, newOwner, signature, identityChannel` | empty |

use crate::domain::entities::Response;
use crate::domain::errors::RegistryError;
use crate::domain::transfer::TransferRequest;
use crate::metrics;
use crate::ports::inbound::PropertyRegistryApi;
use crate::ports::outbound::LedgerContext;
use tracing::{debug, warn};

/// Invocation function names.
pub mod functions {
    pub const GET_CREATOR_IDENTITY: &str = "getCreatorIdentity";
    pub const ADD_PROPERTY: &str = "addProperty";
    pub const GET_PROPERTY: &str = "getProperty";
    pub const TRANSFER_PROPERTY: &str = "transferProperty";
}

/// Dispatches host invocations to a `PropertyRegistryApi`.
pub struct InvocationHandler<A> {
    api: A,
}

impl<A: PropertyRegistryApi> InvocationHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Deployment-time initialisation.
    pub fn init(&self, ctx: &mut dyn LedgerContext) -> Response {
        let result = self.api.initialize(ctx).map(|()| Vec::new());
        Self::respond("init", result)
    }

    /// Run `function` with `args` against `ctx`.
    pub fn invoke(&self, ctx: &mut dyn LedgerContext, function: &str, args: &[String]) -> Response {
        debug!(function = %function, args = args.len(), "Invocation received");

        let result = match function {
            functions::GET_CREATOR_IDENTITY => self
                .api
                .creator_identity(&*ctx)
                .map(String::into_bytes),

            functions::ADD_PROPERTY => expect_args(function, args, 3).and_then(|()| {
                self.api
                    .add_property(ctx, &args[0], &args[1], &args[2])
                    .map(|_| Vec::new())
            }),

            functions::GET_PROPERTY => expect_args(function, args, 1).and_then(|()| {
                self.api
                    .get_property(&*ctx, &args[0])
                    .map(Option::unwrap_or_default)
            }),

            functions::TRANSFER_PROPERTY => expect_args(function, args, 4).and_then(|()| {
                let request = TransferRequest::new(&args[0], &args[1], &args[2], &args[3]);
                self.api
                    .transfer_property(ctx, &request)
                    .map(|_| Vec::new())
            }),

            other => Err(RegistryError::UnknownFunction(other.to_string())),
        };

        let label = match function {
            functions::GET_CREATOR_IDENTITY
            | functions::ADD_PROPERTY
            | functions::GET_PROPERTY
            | functions::TRANSFER_PROPERTY => function,
            _ => "unknown",
        };
        Self::respond(label, result)
    }

    fn respond(function: &str, result: Result<Vec<u8>, RegistryError>) -> Response {
        match result {
            Ok(payload) => {
                metrics::record_invocation(function, "ok");
                Response::success(payload)
            }
            Err(e) => {
                metrics::record_invocation(function, e.kind());
                warn!(function = %function, kind = e.kind(), error = %e, "Invocation failed");
                Response::error(e.to_string())
            }
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> Result<(), RegistryError> {
    if args.len() != expected {
        return Err(RegistryError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}
