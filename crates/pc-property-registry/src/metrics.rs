//! # Registry Metrics
//!
//! Prometheus counters for invocation outcomes and transfer activity.
//!
//! Enable with the `metrics` feature:
//! ```toml
//! pc-property-registry = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `property_invocations_total` - Invocations, by function and outcome
//!   (`ok` or the error kind)
//! - `property_transfers_total` - Completed transfers
//! - `property_signature_rejections_total` - Transfers refused because the
//!   owner signature did not verify, by scheme

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Invocations, labeled by function and outcome
    pub static ref INVOCATIONS: IntCounterVec = register_int_counter_vec!(
        "property_invocations_total",
        "Total number of registry invocations",
        &["function", "outcome"]
    )
    .expect("Failed to create INVOCATIONS metric");

    /// Completed transfers
    pub static ref TRANSFERS: IntCounter = register_int_counter!(
        "property_transfers_total",
        "Total number of completed property transfers"
    )
    .expect("Failed to create TRANSFERS metric");

    /// Rejected transfer signatures, labeled by scheme
    pub static ref SIGNATURE_REJECTIONS: IntCounterVec = register_int_counter_vec!(
        "property_signature_rejections_total",
        "Total number of transfer signatures that failed verification",
        &["scheme"]
    )
    .expect("Failed to create SIGNATURE_REJECTIONS metric");
}

/// Record one invocation and its outcome
#[cfg(feature = "metrics")]
pub fn record_invocation(function: &str, outcome: &str) {
    INVOCATIONS.with_label_values(&[function, outcome]).inc();
}

/// Record a completed transfer
#[cfg(feature = "metrics")]
pub fn record_transfer() {
    TRANSFERS.inc();
}

/// Record a rejected transfer signature
#[cfg(feature = "metrics")]
pub fn record_signature_rejection(scheme: &str) {
    SIGNATURE_REJECTIONS.with_label_values(&[scheme]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_invocation(_function: &str, _outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_transfer() {}

#[cfg(not(feature = "metrics"))]
pub fn record_signature_rejection(_scheme: &str) {}
