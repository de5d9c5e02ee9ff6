//! Weather-station appliance controller.
//!
//! Reads ambient temperature and barometric pressure from an environmental
//! sensor driver, mirrors readings on a 4-character alphanumeric display
//! and a 7-LED strip, and publishes temperature telemetry to a remote
//! ingestion endpoint over an authenticated connection.
//!
//! The domain core never touches hardware directly: every peripheral and
//! the telemetry link sit behind port traits in [`app::ports`], so the
//! whole pipeline runs against mock adapters in tests.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod telemetry;

pub mod adapters;
