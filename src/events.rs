//! Sensor event delivery.
//!
//! The sensor driver delivers readings from its own execution context
//! (a driver thread, an ISR bridge, a bus callback). The cooperative
//! poll loop consumes them. The handoff is a bounded channel:
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ sensor delivery  │────▶│  EventQueue   │────▶│  poll loop   │
//! │ context          │     │  (bounded)    │     │  (consumer)  │
//! └──────────────────┘     └───────────────┘     └──────────────┘
//! ```
//!
//! A full queue drops the event with a diagnostic log — nothing ever
//! blocks the delivery context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

/// Maximum number of undelivered sensor events.
pub const EVENT_QUEUE_CAP: usize = 16;

/// The sensor kinds this station consumes. Closed set; dispatch is an
/// explicit match in the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// Ambient temperature, degrees Celsius.
    Temperature,
    /// Barometric pressure, hPa.
    Pressure,
}

/// A single scalar delivered by a sensor, tagged by kind.
/// Ephemeral — consumed synchronously in delivery order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub kind: SensorKind,
    pub value: f32,
}

/// Everything the sensor subsystem can deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    /// A new reading arrived.
    Reading(SensorReading),
    /// The sensor changed its reported accuracy. Logged only; no data
    /// effect.
    AccuracyChanged { kind: SensorKind, accuracy: u8 },
}

/// Bounded MPSC handoff between the delivery context and the poll loop.
pub struct EventQueue {
    inner: Channel<CriticalSectionRawMutex, SensorEvent, EVENT_QUEUE_CAP>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Publish an event from the delivery context.
    /// Returns `false` if the queue was full (event dropped).
    pub fn publish(&self, event: SensorEvent) -> bool {
        match self.inner.try_send(event) {
            Ok(()) => true,
            Err(_) => {
                warn!("event queue full, dropping {event:?}");
                false
            }
        }
    }

    /// Drain all pending events into a callback, FIFO order.
    pub fn drain(&self, mut handler: impl FnMut(SensorEvent)) {
        while let Ok(event) = self.inner.try_receive() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
