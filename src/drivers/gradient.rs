//! Pressure-to-colour gradient for the LED strip.
//!
//! Maps a barometric pressure to a banded gradient frame: the fill level
//! of the strip tracks where the pressure sits in the calibration domain,
//! and each lit LED is coloured by interpolating between the adjacent
//! weather bands. Low pressure reads "stormy", high pressure "clear".
//!
//! The band thresholds and colours are a calibration table, not logic —
//! swap the [`GradientTable`] without touching the mapping. The mapping
//! itself is total over finite inputs (out-of-domain pressures clamp to
//! the nearest band), deterministic, and side-effect-free.

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// Number of LEDs on the strip. A frame always carries exactly this many
/// colours.
pub const LED_COUNT: usize = 7;

/// Number of calibration bands.
pub const BAND_COUNT: usize = 5;

/// One calibration band: the pressure at which it begins and its colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherBand {
    /// Pressure where this band begins, hPa.
    pub floor_hpa: f32,
    pub colour: Rgb,
}

/// Calibration table for the gradient, bands ordered by ascending floor.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    bands: [WeatherBand; BAND_COUNT],
}

// ── Default calibration (stormy → clear) ──────────────────────

pub const COLOUR_STORM: Rgb = (255, 0, 0);
pub const COLOUR_RAIN: Rgb = (255, 128, 0);
pub const COLOUR_CHANGE: Rgb = (255, 255, 0);
pub const COLOUR_FAIR: Rgb = (0, 200, 80);
pub const COLOUR_CLEAR: Rgb = (0, 120, 255);

/// Lower edge of the default calibration domain, hPa.
pub const BAROMETER_RANGE_LOW: f32 = 948.45;
/// Upper edge of the default calibration domain, hPa.
pub const BAROMETER_RANGE_HIGH: f32 = 1063.96;

impl GradientTable {
    /// Build a table from explicit bands. Bands are sorted by floor so the
    /// mapping stays total regardless of input order.
    pub fn new(mut bands: [WeatherBand; BAND_COUNT]) -> Self {
        bands.sort_by(|a, b| a.floor_hpa.total_cmp(&b.floor_hpa));
        Self { bands }
    }

    /// The calibration domain: (lowest floor, highest floor).
    pub fn domain(&self) -> (f32, f32) {
        (
            self.bands[0].floor_hpa,
            self.bands[BAND_COUNT - 1].floor_hpa,
        )
    }

    /// Colour at an exact pressure, clamped to the nearest band outside
    /// the domain and linearly interpolated between bands inside it.
    fn colour_at(&self, pressure_hpa: f32) -> Rgb {
        let bands = &self.bands;
        if !(pressure_hpa > bands[0].floor_hpa) {
            return bands[0].colour;
        }
        for pair in bands.windows(2) {
            if pressure_hpa <= pair[1].floor_hpa {
                let span = pair[1].floor_hpa - pair[0].floor_hpa;
                let frac = if span > 0.0 {
                    (pressure_hpa - pair[0].floor_hpa) / span
                } else {
                    0.0
                };
                return lerp(pair[0].colour, pair[1].colour, frac);
            }
        }
        bands[BAND_COUNT - 1].colour
    }
}

impl Default for GradientTable {
    fn default() -> Self {
        let step = (BAROMETER_RANGE_HIGH - BAROMETER_RANGE_LOW) / (BAND_COUNT - 1) as f32;
        let colours = [
            COLOUR_STORM,
            COLOUR_RAIN,
            COLOUR_CHANGE,
            COLOUR_FAIR,
            COLOUR_CLEAR,
        ];
        let mut bands = [WeatherBand {
            floor_hpa: 0.0,
            colour: (0, 0, 0),
        }; BAND_COUNT];
        for (i, band) in bands.iter_mut().enumerate() {
            band.floor_hpa = BAROMETER_RANGE_LOW + step * i as f32;
            band.colour = colours[i];
        }
        Self { bands }
    }
}

/// Compute the strip frame for a pressure value.
///
/// The fill fraction over the calibration domain decides how many LEDs
/// light (always at least one); each lit LED is coloured for the pressure
/// its position represents. Unlit LEDs are black.
pub fn weather_strip_colors(pressure_hpa: f32, table: &GradientTable) -> [Rgb; LED_COUNT] {
    let (lo, hi) = table.domain();
    let span = hi - lo;
    let raw = if span > 0.0 { (pressure_hpa - lo) / span } else { 0.0 };
    // NaN falls to the stormiest band rather than poisoning the fill math.
    let fill = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };

    let lit = 1 + (fill * (LED_COUNT - 1) as f32).round() as usize;
    let mut frame = [(0, 0, 0); LED_COUNT];
    for (i, slot) in frame.iter_mut().take(lit).enumerate() {
        let position = i as f32 / (LED_COUNT - 1) as f32;
        *slot = table.colour_at(lo + position * span);
    }
    frame
}

fn lerp(a: Rgb, b: Rgb, frac: f32) -> Rgb {
    let t = frac.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        let v = f32::from(x) + (f32::from(y) - f32::from(x)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    (
        channel(a.0, b.0),
        channel(a.1, b.1),
        channel(a.2, b.2),
    )
}
