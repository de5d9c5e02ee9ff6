//! Sensor event router and handlers.
//!
//! [`AppService`] receives [`SensorEvent`]s from the delivery queue and
//! dispatches them by kind:
//!
//! ```text
//!  SensorEvent ──▶ ┌─────────────────────┐ ──▶ DisplayPort
//!                  │     AppService      │
//!                  │  router · handlers  │ ──▶ LedStripPort
//!                  └─────────────────────┘ ──▶ TemperatureCell
//! ```
//!
//! Dispatch is synchronous on the caller's context, in delivery order.
//! Runtime write failures are logged and swallowed here; they never
//! reach the router's caller or the publisher.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::drivers::gradient::{GradientTable, weather_strip_colors};
use crate::events::{SensorEvent, SensorKind, SensorReading};

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, LedStripPort};
use super::shared::TemperatureCell;

/// Routes readings to the temperature and pressure handlers.
pub struct AppService {
    cell: Arc<TemperatureCell>,
    gradient: GradientTable,
}

impl AppService {
    pub fn new(cell: Arc<TemperatureCell>, gradient: GradientTable) -> Self {
        Self { cell, gradient }
    }

    /// Dispatch one sensor event to its handler.
    pub fn handle_event(
        &mut self,
        event: SensorEvent,
        display: &mut impl DisplayPort,
        ledstrip: &mut impl LedStripPort,
        sink: &mut impl EventSink,
    ) {
        match event {
            SensorEvent::Reading(reading) if !reading.value.is_finite() => {
                warn!("dropping non-finite {:?} reading", reading.kind);
                sink.emit(&AppEvent::ReadingDropped(reading));
            }
            SensorEvent::Reading(SensorReading {
                kind: SensorKind::Temperature,
                value,
            }) => self.on_temperature(value, display),
            SensorEvent::Reading(SensorReading {
                kind: SensorKind::Pressure,
                value,
            }) => self.on_pressure(value, ledstrip),
            SensorEvent::AccuracyChanged { kind, accuracy } => {
                debug!("accuracy changed: {kind:?} -> {accuracy}");
            }
        }
    }

    /// Format the reading to two decimals and show it. The shared cell is
    /// updated only after the display write succeeds — a failed write
    /// leaves telemetry reporting the previous confirmed value.
    fn on_temperature(&mut self, celsius: f32, display: &mut impl DisplayPort) {
        let text = format!("{celsius:.2}");
        match display.write_text(&text) {
            Ok(()) => self.cell.store(celsius),
            Err(e) => error!("error updating display: {e}"),
        }
    }

    /// Map the pressure through the gradient and refresh the strip.
    fn on_pressure(&mut self, pressure_hpa: f32, ledstrip: &mut impl LedStripPort) {
        let frame = weather_strip_colors(pressure_hpa, &self.gradient);
        if let Err(e) = ledstrip.write(&frame) {
            error!("error updating ledstrip: {e}");
        }
    }
}
