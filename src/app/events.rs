//! Outbound application events.
//!
//! The domain emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — log to the console, mirror onto a
//! diagnostics channel, count them in tests.

use crate::events::SensorReading;
use crate::lifecycle::Stage;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The lifecycle manager moved between stages.
    StageChanged { from: Stage, to: Stage },

    /// A telemetry event was accepted by the link.
    TelemetryPublished { temperature_c: f32 },

    /// The link rejected a telemetry event; the cadence continues.
    TelemetryFailed,

    /// A reading was dropped before dispatch (non-finite value).
    ReadingDropped(SensorReading),
}
