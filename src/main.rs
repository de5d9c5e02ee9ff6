use std::time::Duration;

use log::info;

use weatherstation::adapters::key_store::FileKeyStore;
use weatherstation::adapters::log_sink::LogEventSink;
use weatherstation::adapters::sim_board::{SimDisplay, SimLedStrip, SimSensorDriver};
use weatherstation::adapters::telemetry_link::SimTelemetryLink;
use weatherstation::config::StationConfig;
use weatherstation::lifecycle::Station;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StationConfig::default();
    let key_dir = std::env::var("STATION_KEY_DIR").unwrap_or_else(|_| ".".into());
    let key_store = FileKeyStore::new(key_dir);

    let sensor = SimSensorDriver::new(u64::from(config.poll_interval_ms) * 5);
    let display = SimDisplay::new();
    let ledstrip = SimLedStrip::new();
    let telemetry = SimTelemetryLink::new();
    let mut sink = LogEventSink::new();

    let poll_interval_ms = config.poll_interval_ms;
    let mut station = Station::start(
        config, &key_store, sensor, display, ledstrip, telemetry, &mut sink,
    )?;
    info!(
        "station running (telemetry {})",
        if station.telemetry_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );

    loop {
        std::thread::sleep(Duration::from_millis(u64::from(poll_interval_ms)));
        station.poll(poll_interval_ms, &mut sink);
    }
}
