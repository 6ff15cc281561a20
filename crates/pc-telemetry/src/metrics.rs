//! Prometheus text exposition.
//!
//! Metrics are registered by the crates that own them (for example
//! `property_transfers_total` in the registry crate); this module only
//! renders the default registry.

use crate::TelemetryError;
use prometheus::{Encoder, TextEncoder};

/// Encode every metric in the default registry as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsEncode(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsEncode(e.to_string()))
}
