//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / Station (domain)
//! ```
//!
//! Driven adapters (peripheral handles, the telemetry link, the key
//! store, event sinks) implement these traits. The domain consumes them
//! via generics, so the pipeline never touches hardware directly and
//! runs unchanged against mocks.
//!
//! All port errors are typed — callers must handle every variant
//! explicitly. Runtime write failures are swallowed and logged by the
//! handlers; startup failures decide the lifecycle stage outcome.

use std::sync::Arc;

use crate::drivers::gradient::{LED_COUNT, Rgb};
use crate::error::{CredentialError, DeviceError, TelemetryError};
use crate::events::EventQueue;
use crate::telemetry::credential::{DeviceKey, KeyBytes};
use crate::telemetry::{ConnectionParams, TelemetryEvent};

// ───────────────────────────────────────────────────────────────
// Sensor driver port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The combined environmental sensor driver. One ambient-temperature and
/// one barometric-pressure instance — the first registered of each kind.
///
/// `start` hands the driver the delivery queue; from then on the driver
/// publishes [`SensorEvent`](crate::events::SensorEvent)s from its own
/// execution context. `close` stops delivery and releases the bus.
pub trait SensorDriverPort {
    fn start(&mut self, queue: Arc<EventQueue>) -> Result<(), DeviceError>;
    fn close(&mut self) -> Result<(), DeviceError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// 4-character alphanumeric display.
pub trait DisplayPort {
    fn set_enabled(&mut self, enabled: bool) -> Result<(), DeviceError>;

    /// Write an already-formatted value.
    fn write_text(&mut self, text: &str) -> Result<(), DeviceError>;

    fn clear(&mut self) -> Result<(), DeviceError>;

    fn close(&mut self) -> Result<(), DeviceError>;
}

/// APA102-class LED strip. A frame is always exactly [`LED_COUNT`]
/// colours.
pub trait LedStripPort {
    fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError>;

    fn write(&mut self, frame: &[Rgb; LED_COUNT]) -> Result<(), DeviceError>;

    fn close(&mut self) -> Result<(), DeviceError>;
}

// ───────────────────────────────────────────────────────────────
// Telemetry port (driven adapter: domain → ingestion endpoint)
// ───────────────────────────────────────────────────────────────

/// The authenticated, persistent telemetry connection. Transport and
/// auth internals are the adapter's business; the domain only connects,
/// publishes and disconnects.
pub trait TelemetryPort {
    fn connect(
        &mut self,
        params: &ConnectionParams,
        key: &DeviceKey,
    ) -> Result<(), TelemetryError>;

    fn is_connected(&self) -> bool;

    fn publish(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError>;

    fn disconnect(&mut self) -> Result<(), TelemetryError>;
}

// ───────────────────────────────────────────────────────────────
// Key store port (driven adapter: bundled storage → domain)
// ───────────────────────────────────────────────────────────────

/// Raw key-material access: bytes by resource identifier. Parsing is the
/// domain's job ([`crate::telemetry::credential`]).
pub trait KeyStorePort {
    fn read_key(&self, resource: &str) -> Result<KeyBytes, CredentialError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
