//! Event sink that forwards application events to the log.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::StageChanged { from, to } => info!("stage: {from:?} -> {to:?}"),
            AppEvent::TelemetryPublished { temperature_c } => {
                debug!("telemetry published ({temperature_c:.2} C)");
            }
            AppEvent::TelemetryFailed => warn!("telemetry event was not accepted"),
            AppEvent::ReadingDropped(reading) => warn!("reading dropped: {reading:?}"),
        }
    }
}
