//! Periodic telemetry publisher.
//!
//! Tick-driven: the poll loop advances the publisher by elapsed wall
//! time, and every full period it reads the shared temperature cell,
//! builds a fresh payload and hands it to the link. Rescheduling is
//! unconditional — a publish failure is logged and the next period fires
//! on schedule. Fire-and-forget cadence, not a retry policy.
//!
//! The lifecycle manager cancels the publisher as the first step of
//! teardown, before the telemetry connection is released; a cancelled
//! publisher never fires again.

use log::{debug, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, TelemetryPort};
use crate::app::shared::TemperatureCell;
use crate::telemetry::{Qos, TelemetryEvent};

/// Render the telemetry payload: a single JSON field with exactly two
/// decimal digits.
pub fn temperature_payload(celsius: f32) -> Vec<u8> {
    format!("{{\"temperature\": {celsius:.2}}}").into_bytes()
}

pub struct TelemetryPublisher {
    interval_ms: u32,
    elapsed_ms: u32,
    cancelled: bool,
    fired: u64,
}

impl TelemetryPublisher {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            cancelled: false,
            fired: 0,
        }
    }

    /// Stop the cadence permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Publish attempts made so far (successes and failures alike).
    pub fn ticks_fired(&self) -> u64 {
        self.fired
    }

    /// Advance by `delta_ms`, firing once per full period elapsed.
    pub fn tick(
        &mut self,
        delta_ms: u32,
        cell: &TemperatureCell,
        link: &mut impl TelemetryPort,
        sink: &mut impl EventSink,
    ) {
        if self.cancelled {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.fire(cell, link, sink);
        }
    }

    fn fire(
        &mut self,
        cell: &TemperatureCell,
        link: &mut impl TelemetryPort,
        sink: &mut impl EventSink,
    ) {
        self.fired += 1;
        debug!("publishing telemetry event");

        let temperature_c = cell.load();
        let event = TelemetryEvent::new(temperature_payload(temperature_c), Qos::AtLeastOnce);
        match link.publish(&event) {
            Ok(()) => {
                debug!("successfully published");
                sink.emit(&AppEvent::TelemetryPublished { temperature_c });
            }
            Err(e) => {
                // Cadence continues; at-least-once means the failed
                // attempt is recorded, not retried here.
                warn!("telemetry publish failed: {e}");
                sink.emit(&AppEvent::TelemetryFailed);
            }
        }
    }
}
