//! Actuator support logic.
//!
//! Pure, hardware-independent code backing the actuator ports. The
//! physical bus drivers live behind the port traits in
//! [`crate::app::ports`]; this module only computes what to write.

pub mod gradient;
