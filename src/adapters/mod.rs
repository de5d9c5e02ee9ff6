//! Driven adapters.
//!
//! Concrete implementations of the port traits in [`crate::app::ports`].
//! The physical bus drivers are external collaborators; the adapters here
//! are the host-side stand-ins the binary runs against, plus the key
//! store and the log event sink used on every target.

pub mod key_store;
pub mod log_sink;
pub mod sim_board;
pub mod telemetry_link;
