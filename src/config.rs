//! Station configuration parameters
//!
//! All tunable parameters for the weather station, including the opaque
//! connection-parameter strings handed through to the telemetry link.

use serde::{Deserialize, Serialize};

use crate::telemetry::ConnectionParams;

/// Core station configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    // --- Timing ---
    /// Telemetry publish period (milliseconds)
    pub telemetry_interval_ms: u32,
    /// Cooperative poll-loop interval (milliseconds)
    pub poll_interval_ms: u32,

    // --- Actuators ---
    /// LED strip brightness (0-31, APA102 global brightness)
    pub ledstrip_brightness: u8,

    // --- Telemetry ---
    /// Temperature reported until the first confirmed reading (Celsius)
    pub default_temperature_c: f32,
    /// Bundled-storage identifier of the PKCS8 private key
    pub key_resource: String,
    /// Cloud project identifier (opaque)
    pub project_id: String,
    /// Device registry name (opaque)
    pub registry_id: String,
    /// Registry region (opaque)
    pub region: String,
    /// Device identifier within the registry (opaque)
    pub device_id: String,
}

impl StationConfig {
    /// Assemble the connection parameters handed to the telemetry link.
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            project_id: self.project_id.clone(),
            registry_id: self.registry_id.clone(),
            region: self.region.clone(),
            device_id: self.device_id.clone(),
        }
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            // Timing
            telemetry_interval_ms: 2000,
            poll_interval_ms: 100,

            // Actuators
            ledstrip_brightness: 1,

            // Telemetry
            default_temperature_c: 30.0,
            key_resource: "privatekey".to_owned(),
            project_id: "my-project".to_owned(),
            registry_id: "my-registry".to_owned(),
            region: "us-central1".to_owned(),
            device_id: "my-device".to_owned(),
        }
    }
}
