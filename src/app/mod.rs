//! Application core.
//!
//! Port traits, outbound events, the shared temperature slot, and the
//! sensor-event router live here. Nothing in this module touches
//! hardware or the network directly.

pub mod events;
pub mod ports;
pub mod service;
pub mod shared;
