//! Metrics for SDK calls made through the facade.
//!
//! # Metrics
//! - `fabric_sdk_calls_total` (counter): calls by operation, outcome
//! - `fabric_sdk_call_duration_seconds` (histogram): latency by operation
//! - `fabric_connected` (gauge): 1 once connect succeeded
//!
//! Recording is a no-op until the application installs a recorder.

use std::time::Instant;

/// Record the outcome and latency of one SDK call.
pub fn record_sdk_call(operation: &'static str, success: bool, start: Instant) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!("fabric_sdk_calls_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("fabric_sdk_call_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record whether the facade holds a connected client.
pub fn record_connected(connected: bool) {
    metrics::gauge!("fabric_connected").set(if connected { 1.0 } else { 0.0 });
}
