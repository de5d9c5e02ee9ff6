//! Telemetry subsystem.
//!
//! Connection parameters, the telemetry event wire type, credential
//! loading and the periodic publisher. The transport itself lives behind
//! [`TelemetryPort`](crate::app::ports::TelemetryPort).

pub mod credential;
pub mod publisher;

/// Connection parameters for the ingestion endpoint. Plain value object;
/// every field is an opaque string passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub project_id: String,
    pub registry_id: String,
    pub region: String,
    pub device_id: String,
}

/// Delivery-quality guarantee for a telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qos {
    /// The publish may duplicate but never silently drops a message
    /// without at least one attempt recorded as failed.
    AtLeastOnce,
}

/// A discrete message published to the ingestion endpoint. Constructed
/// fresh each publish cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub payload: Vec<u8>,
    pub qos: Qos,
}

impl TelemetryEvent {
    pub fn new(payload: Vec<u8>, qos: Qos) -> Self {
        Self { payload, qos }
    }
}
