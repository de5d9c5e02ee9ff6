//! Resource lifecycle manager.
//!
//! [`Station`] owns the four independently released resources — sensor
//! driver, display, LED strip, telemetry link — plus the publisher, and
//! walks them through the startup stages:
//!
//! ```text
//! CredentialLoad → ConnectionSetup → SensorInit → DisplayInit → LedInit
//!      (non-fatal)     (non-fatal)     (fatal)      (fatal)     (fatal)
//!                                → Running → Teardown
//! ```
//!
//! Credential/connection failures only disable the telemetry subsystem;
//! a hardware init failure aborts startup entirely, releasing whatever
//! was already acquired. Teardown cancels the publisher first, then
//! gives every resource exactly one independently guarded release
//! attempt, clearing each handle whether or not its release succeeded.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{
    DisplayPort, EventSink, KeyStorePort, LedStripPort, SensorDriverPort, TelemetryPort,
};
use crate::app::service::AppService;
use crate::app::shared::TemperatureCell;
use crate::config::StationConfig;
use crate::drivers::gradient::{GradientTable, LED_COUNT, Rgb};
use crate::error::{Error, Result};
use crate::events::EventQueue;
use crate::telemetry::credential;
use crate::telemetry::publisher::TelemetryPublisher;

/// Pattern shown on the display right after it is enabled.
const DISPLAY_TEST_PATTERN: &str = "1234";

/// Colour of the initial strip frame.
const LEDSTRIP_INIT_COLOUR: Rgb = (0, 255, 0);

/// Lifecycle stages, in startup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CredentialLoad,
    ConnectionSetup,
    SensorInit,
    DisplayInit,
    LedInit,
    Running,
    Teardown,
}

/// The lifecycle manager. Each resource is an optional handle released
/// independently — no shared control flow a single failure could
/// short-circuit.
pub struct Station<S, D, L, T>
where
    S: SensorDriverPort,
    D: DisplayPort,
    L: LedStripPort,
    T: TelemetryPort,
{
    stage: Stage,
    config: StationConfig,
    queue: Arc<EventQueue>,
    cell: Arc<TemperatureCell>,
    app: AppService,
    sensor: Option<S>,
    display: Option<D>,
    ledstrip: Option<L>,
    telemetry: Option<T>,
    publisher: Option<TelemetryPublisher>,
}

impl<S, D, L, T> Station<S, D, L, T>
where
    S: SensorDriverPort,
    D: DisplayPort,
    L: LedStripPort,
    T: TelemetryPort,
{
    /// Run the startup sequence. On a fatal stage failure everything
    /// acquired so far is released before the error is returned — there
    /// is no partial running state.
    pub fn start(
        config: StationConfig,
        key_store: &impl KeyStorePort,
        mut sensor: S,
        mut display: D,
        mut ledstrip: L,
        mut telemetry: T,
        sink: &mut impl EventSink,
    ) -> Result<Self> {
        let cell = Arc::new(TemperatureCell::new(config.default_temperature_c));
        let app = AppService::new(Arc::clone(&cell), GradientTable::default());
        let mut station = Self {
            stage: Stage::CredentialLoad,
            config,
            queue: Arc::new(EventQueue::new()),
            cell,
            app,
            sensor: None,
            display: None,
            ledstrip: None,
            telemetry: None,
            publisher: None,
        };

        // ── CredentialLoad (non-fatal) ────────────────────────
        let key = match credential::load_device_key(key_store, &station.config.key_resource) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("credential unavailable ({e}); telemetry disabled");
                None
            }
        };

        // ── ConnectionSetup (non-fatal) ───────────────────────
        station.enter(Stage::ConnectionSetup, sink);
        if let Some(key) = key {
            let params = station.config.connection_params();
            match telemetry.connect(&params, &key) {
                Ok(()) => {
                    debug!("telemetry link connected");
                    station.publisher = Some(TelemetryPublisher::new(
                        station.config.telemetry_interval_ms,
                    ));
                    station.telemetry = Some(telemetry);
                }
                Err(e) => warn!("telemetry connect failed ({e}); telemetry disabled"),
            }
        }

        // ── SensorInit (fatal) ────────────────────────────────
        station.enter(Stage::SensorInit, sink);
        match sensor.start(Arc::clone(&station.queue)) {
            Ok(()) => {
                debug!("initialized environmental sensor driver");
                station.sensor = Some(sensor);
            }
            Err(e) => {
                error!("error initializing sensor driver: {e}");
                station.teardown(sink);
                return Err(Error::Sensor(e));
            }
        }

        // ── DisplayInit (fatal) ───────────────────────────────
        station.enter(Stage::DisplayInit, sink);
        let init = display
            .set_enabled(true)
            .and_then(|()| display.write_text(DISPLAY_TEST_PATTERN));
        match init {
            Ok(()) => {
                debug!("initialized display");
                station.display = Some(display);
            }
            Err(e) => {
                error!("error initializing display: {e}");
                station.teardown(sink);
                return Err(Error::Display(e));
            }
        }

        // ── LedInit (fatal) ───────────────────────────────────
        station.enter(Stage::LedInit, sink);
        let frame = [LEDSTRIP_INIT_COLOUR; LED_COUNT];
        let init = ledstrip
            .set_brightness(station.config.ledstrip_brightness)
            .and_then(|()| ledstrip.write(&frame))
            // The strip swallows its first frame after power-up; write
            // the initial frame twice so it takes visible effect.
            .and_then(|()| ledstrip.write(&frame));
        match init {
            Ok(()) => {
                debug!("initialized ledstrip");
                station.ledstrip = Some(ledstrip);
            }
            Err(e) => {
                error!("error initializing ledstrip: {e}");
                station.teardown(sink);
                return Err(Error::LedStrip(e));
            }
        }

        station.enter(Stage::Running, sink);
        info!("weather station running");
        Ok(station)
    }

    /// One cooperative cycle: drain pending sensor events through the
    /// router, then advance the publisher by `delta_ms`.
    pub fn poll(&mut self, delta_ms: u32, sink: &mut impl EventSink) {
        if self.stage != Stage::Running {
            return;
        }
        let Self {
            app,
            queue,
            display,
            ledstrip,
            publisher,
            telemetry,
            cell,
            ..
        } = self;

        if let (Some(display), Some(ledstrip)) = (display.as_mut(), ledstrip.as_mut()) {
            queue.drain(|event| app.handle_event(event, display, ledstrip, sink));
        }

        if let (Some(publisher), Some(link)) = (publisher.as_mut(), telemetry.as_mut()) {
            publisher.tick(delta_ms, cell, link, sink);
        }
    }

    /// Release everything. The publisher is cancelled before the
    /// telemetry link goes away; each resource gets exactly one release
    /// attempt and its handle is cleared regardless of the outcome.
    pub fn teardown(&mut self, sink: &mut impl EventSink) {
        if self.stage == Stage::Teardown {
            return;
        }
        self.enter(Stage::Teardown, sink);

        if let Some(publisher) = self.publisher.as_mut() {
            publisher.cancel();
        }
        self.publisher = None;

        if let Some(mut sensor) = self.sensor.take() {
            if let Err(e) = sensor.close() {
                error!("error closing sensors: {e}");
            }
        }

        if let Some(mut display) = self.display.take() {
            let shutdown = display
                .clear()
                .and_then(|()| display.set_enabled(false))
                .and_then(|()| display.close());
            if let Err(e) = shutdown {
                error!("error closing display: {e}");
            }
        }

        if let Some(mut ledstrip) = self.ledstrip.take() {
            let shutdown = ledstrip
                .set_brightness(0)
                .and_then(|()| ledstrip.write(&[(0, 0, 0); LED_COUNT]))
                .and_then(|()| ledstrip.close());
            if let Err(e) = shutdown {
                error!("error shutting strip: {e}");
            }
        }

        if let Some(mut telemetry) = self.telemetry.take() {
            if telemetry.is_connected() {
                if let Err(e) = telemetry.disconnect() {
                    error!("error disconnecting telemetry: {e}");
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_running(&self) -> bool {
        self.stage == Stage::Running
    }

    /// Delivery handle for the sensor context (also used by tests to
    /// inject readings).
    pub fn event_queue(&self) -> Arc<EventQueue> {
        Arc::clone(&self.queue)
    }

    /// Latest confirmed temperature, or the configured default before
    /// the first successful display write.
    pub fn last_temperature(&self) -> f32 {
        self.cell.load()
    }

    /// Whether the telemetry subsystem survived startup.
    pub fn telemetry_enabled(&self) -> bool {
        self.telemetry.is_some()
    }

    // ── Internal ──────────────────────────────────────────────

    fn enter(&mut self, to: Stage, sink: &mut impl EventSink) {
        let from = self.stage;
        self.stage = to;
        debug!("stage {from:?} -> {to:?}");
        sink.emit(&AppEvent::StageChanged { from, to });
    }
}

impl<S, D, L, T> Drop for Station<S, D, L, T>
where
    S: SensorDriverPort,
    D: DisplayPort,
    L: LedStripPort,
    T: TelemetryPort,
{
    fn drop(&mut self) {
        if self.stage != Stage::Teardown {
            self.teardown(&mut crate::adapters::log_sink::LogEventSink::new());
        }
    }
}
