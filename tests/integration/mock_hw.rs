//! Mock hardware for lifecycle and pipeline tests.
//!
//! The station consumes its adapters by value, so every mock keeps its
//! observable state behind a shared probe the test holds onto.

use std::sync::{Arc, Mutex};

use rsa::RsaPrivateKey;
use rsa::pkcs8::EncodePrivateKey;

use weatherstation::app::events::AppEvent;
use weatherstation::app::ports::{
    DisplayPort, EventSink, KeyStorePort, LedStripPort, SensorDriverPort, TelemetryPort,
};
use weatherstation::drivers::gradient::{LED_COUNT, Rgb};
use weatherstation::error::{CredentialError, DeviceError, TelemetryError};
use weatherstation::events::EventQueue;
use weatherstation::telemetry::credential::{DeviceKey, KeyBytes};
use weatherstation::telemetry::{ConnectionParams, TelemetryEvent};

/// A fresh 512-bit RSA key as PKCS8 DER, for tests that need a valid
/// credential.
pub fn valid_key_der() -> Vec<u8> {
    let key = RsaPrivateKey::new(&mut rand::rngs::OsRng, 512).unwrap();
    key.to_pkcs8_der().unwrap().as_bytes().to_vec()
}

// ── Key store ─────────────────────────────────────────────────

pub struct MockKeyStore(pub Option<Vec<u8>>);

impl KeyStorePort for MockKeyStore {
    fn read_key(&self, _resource: &str) -> Result<KeyBytes, CredentialError> {
        match &self.0 {
            Some(bytes) => KeyBytes::from_slice(bytes).map_err(|()| CredentialError::Io),
            None => Err(CredentialError::NotFound),
        }
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink(pub Vec<AppEvent>);

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.0.push(event.clone());
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Default)]
pub struct DisplayState {
    pub enabled: bool,
    pub writes: Vec<String>,
    pub clears: u32,
    pub close_attempts: u32,
    /// 1-based indices of `write_text` calls that fail.
    pub fail_writes: Vec<usize>,
    pub fail_enable: bool,
    pub fail_close: bool,
}

pub struct MockDisplay {
    state: Arc<Mutex<DisplayState>>,
}

impl MockDisplay {
    pub fn new() -> (Self, Arc<Mutex<DisplayState>>) {
        let state = Arc::new(Mutex::new(DisplayState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl DisplayPort for MockDisplay {
    fn set_enabled(&mut self, enabled: bool) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        if s.fail_enable {
            return Err(DeviceError::Io);
        }
        s.enabled = enabled;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        let index = s.writes.len() + 1;
        if s.fail_writes.contains(&index) {
            return Err(DeviceError::Io);
        }
        s.writes.push(text.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        self.state.lock().unwrap().clears += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        s.close_attempts += 1;
        if s.fail_close {
            return Err(DeviceError::Io);
        }
        Ok(())
    }
}

// ── LED strip ─────────────────────────────────────────────────

#[derive(Default)]
pub struct LedStripState {
    pub brightness: Vec<u8>,
    pub frames: Vec<[Rgb; LED_COUNT]>,
    pub close_attempts: u32,
    pub fail_close: bool,
}

pub struct MockLedStrip {
    state: Arc<Mutex<LedStripState>>,
}

impl MockLedStrip {
    pub fn new() -> (Self, Arc<Mutex<LedStripState>>) {
        let state = Arc::new(Mutex::new(LedStripState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl LedStripPort for MockLedStrip {
    fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError> {
        self.state.lock().unwrap().brightness.push(level);
        Ok(())
    }

    fn write(&mut self, frame: &[Rgb; LED_COUNT]) -> Result<(), DeviceError> {
        self.state.lock().unwrap().frames.push(*frame);
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        s.close_attempts += 1;
        if s.fail_close {
            return Err(DeviceError::Io);
        }
        Ok(())
    }
}

// ── Sensor driver ─────────────────────────────────────────────

#[derive(Default)]
pub struct SensorDriverState {
    pub started: bool,
    pub close_attempts: u32,
    pub fail_start: bool,
}

pub struct MockSensorDriver {
    state: Arc<Mutex<SensorDriverState>>,
}

impl MockSensorDriver {
    pub fn new() -> (Self, Arc<Mutex<SensorDriverState>>) {
        let state = Arc::new(Mutex::new(SensorDriverState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl SensorDriverPort for MockSensorDriver {
    fn start(&mut self, _queue: Arc<EventQueue>) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        if s.fail_start {
            return Err(DeviceError::Io);
        }
        s.started = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        let mut s = self.state.lock().unwrap();
        s.close_attempts += 1;
        s.started = false;
        Ok(())
    }
}

// ── Telemetry link ────────────────────────────────────────────

#[derive(Default)]
pub struct TelemetryLinkState {
    pub connected: bool,
    pub connect_params: Option<ConnectionParams>,
    pub publishes: Vec<Vec<u8>>,
    pub publish_attempts: u32,
    pub disconnect_attempts: u32,
    pub fail_connect: bool,
    pub fail_publish: bool,
}

pub struct MockTelemetryLink {
    state: Arc<Mutex<TelemetryLinkState>>,
}

impl MockTelemetryLink {
    pub fn new() -> (Self, Arc<Mutex<TelemetryLinkState>>) {
        let state = Arc::new(Mutex::new(TelemetryLinkState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl TelemetryPort for MockTelemetryLink {
    fn connect(
        &mut self,
        params: &ConnectionParams,
        _key: &DeviceKey,
    ) -> Result<(), TelemetryError> {
        let mut s = self.state.lock().unwrap();
        if s.fail_connect {
            return Err(TelemetryError::ConnectFailed);
        }
        s.connected = true;
        s.connect_params = Some(params.clone());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.lock().unwrap().connected
    }

    fn publish(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        let mut s = self.state.lock().unwrap();
        s.publish_attempts += 1;
        if !s.connected {
            return Err(TelemetryError::NotConnected);
        }
        if s.fail_publish {
            return Err(TelemetryError::PublishFailed);
        }
        s.publishes.push(event.payload.clone());
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), TelemetryError> {
        let mut s = self.state.lock().unwrap();
        s.disconnect_attempts += 1;
        s.connected = false;
        Ok(())
    }
}
