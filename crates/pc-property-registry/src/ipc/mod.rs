//! # Host Invocation Layer
//!
//! Maps named host invocations with string arguments onto the registry API.

pub mod handler;

pub use handler::{functions, InvocationHandler};
