//! Simulated board peripherals.
//!
//! Host stand-ins for the real bus drivers: the display and strip log
//! their writes, and the sensor driver runs a delivery thread feeding
//! slowly drifting synthetic weather into the event queue — the same
//! "foreign execution context" shape as a real bus callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, info};

use crate::app::ports::{DisplayPort, LedStripPort, SensorDriverPort};
use crate::drivers::gradient::{LED_COUNT, Rgb};
use crate::error::DeviceError;
use crate::events::{EventQueue, SensorEvent, SensorKind, SensorReading};

// ───────────────────────────────────────────────────────────────
// Display
// ───────────────────────────────────────────────────────────────

pub struct SimDisplay {
    open: bool,
    enabled: bool,
}

impl SimDisplay {
    pub fn new() -> Self {
        Self {
            open: true,
            enabled: false,
        }
    }
}

impl Default for SimDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for SimDisplay {
    fn set_enabled(&mut self, enabled: bool) -> Result<(), DeviceError> {
        if !self.open {
            return Err(DeviceError::Closed);
        }
        self.enabled = enabled;
        debug!("display enabled = {enabled}");
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DeviceError> {
        if !self.open {
            return Err(DeviceError::Closed);
        }
        info!("display <- \"{text}\"");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        if !self.open {
            return Err(DeviceError::Closed);
        }
        debug!("display cleared");
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.open = false;
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// LED strip
// ───────────────────────────────────────────────────────────────

pub struct SimLedStrip {
    open: bool,
}

impl SimLedStrip {
    pub fn new() -> Self {
        Self { open: true }
    }
}

impl Default for SimLedStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStripPort for SimLedStrip {
    fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError> {
        if !self.open {
            return Err(DeviceError::Closed);
        }
        debug!("ledstrip brightness = {level}");
        Ok(())
    }

    fn write(&mut self, frame: &[Rgb; LED_COUNT]) -> Result<(), DeviceError> {
        if !self.open {
            return Err(DeviceError::Closed);
        }
        let lit = frame.iter().filter(|c| **c != (0, 0, 0)).count();
        info!("ledstrip <- {lit}/{LED_COUNT} lit, frame {frame:?}");
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.open = false;
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Sensor driver
// ───────────────────────────────────────────────────────────────

/// Synthetic BMx280-style driver: one temperature and one pressure
/// instance sampled on a worker thread.
pub struct SimSensorDriver {
    sample_interval_ms: u64,
    running: Option<(Arc<AtomicBool>, JoinHandle<()>)>,
}

impl SimSensorDriver {
    pub fn new(sample_interval_ms: u64) -> Self {
        Self {
            sample_interval_ms: sample_interval_ms.max(1),
            running: None,
        }
    }
}

impl SensorDriverPort for SimSensorDriver {
    fn start(&mut self, queue: Arc<EventQueue>) -> Result<(), DeviceError> {
        if self.running.is_some() {
            return Err(DeviceError::Busy);
        }
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let interval = self.sample_interval_ms;
        let handle = std::thread::spawn(move || {
            let mut elapsed_s: f32 = 0.0;
            while !flag.load(Ordering::Relaxed) {
                let temperature = 22.0 + 4.0 * (elapsed_s / 30.0).sin();
                let pressure = 1006.0 + 45.0 * (elapsed_s / 90.0).sin();
                queue.publish(SensorEvent::Reading(SensorReading {
                    kind: SensorKind::Temperature,
                    value: temperature,
                }));
                queue.publish(SensorEvent::Reading(SensorReading {
                    kind: SensorKind::Pressure,
                    value: pressure,
                }));
                elapsed_s += interval as f32 / 1000.0;
                std::thread::sleep(Duration::from_millis(interval));
            }
        });
        self.running = Some((stop, handle));
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        if let Some((stop, handle)) = self.running.take() {
            stop.store(true, Ordering::Relaxed);
            let _ = handle.join();
        }
        Ok(())
    }
}
