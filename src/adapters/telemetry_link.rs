//! Logging stand-in for the telemetry link.
//!
//! Keeps the connect/publish/disconnect contract of the real transport
//! while only writing to the log, so the host binary exercises the full
//! publisher path without network access.

use log::{debug, info};

use crate::app::ports::TelemetryPort;
use crate::error::TelemetryError;
use crate::telemetry::credential::DeviceKey;
use crate::telemetry::{ConnectionParams, TelemetryEvent};

pub struct SimTelemetryLink {
    connected: bool,
}

impl SimTelemetryLink {
    pub fn new() -> Self {
        Self { connected: false }
    }
}

impl Default for SimTelemetryLink {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryPort for SimTelemetryLink {
    fn connect(
        &mut self,
        params: &ConnectionParams,
        key: &DeviceKey,
    ) -> Result<(), TelemetryError> {
        info!(
            "telemetry link up: project={} registry={} region={} device={} ({} bit key)",
            params.project_id,
            params.registry_id,
            params.region,
            params.device_id,
            key.bits()
        );
        self.connected = true;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn publish(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        if !self.connected {
            return Err(TelemetryError::NotConnected);
        }
        debug!(
            "telemetry <- {} ({:?})",
            String::from_utf8_lossy(&event.payload),
            event.qos
        );
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), TelemetryError> {
        self.connected = false;
        info!("telemetry link closed");
        Ok(())
    }
}
