//! Shared temperature slot.
//!
//! The one piece of state shared between the sensor pipeline and the
//! telemetry publisher. A single-slot atomic handoff: the temperature
//! handler stores after a confirmed display write, the publisher loads on
//! its own cadence. Last write wins, no tearing, stale reads allowed —
//! there is deliberately no mechanism to block the publisher until a
//! first reading arrives.

use core::sync::atomic::{AtomicU32, Ordering};

/// Temperature reported until the first confirmed reading, Celsius.
pub const DEFAULT_TEMPERATURE_C: f32 = 30.0;

/// Single `f32` slot stored as raw bits in an `AtomicU32`.
pub struct TemperatureCell {
    bits: AtomicU32,
}

impl TemperatureCell {
    pub const fn new(initial_c: f32) -> Self {
        Self {
            bits: AtomicU32::new(initial_c.to_bits()),
        }
    }

    /// Store the latest confirmed temperature.
    pub fn store(&self, celsius: f32) {
        self.bits.store(celsius.to_bits(), Ordering::Relaxed);
    }

    /// Load the latest confirmed temperature (or the initial default).
    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for TemperatureCell {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_C)
    }
}
