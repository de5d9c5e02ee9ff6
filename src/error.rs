//! Unified error types for the weather station.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! lifecycle manager's error handling uniform. Peripheral errors are
//! `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible startup operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The environmental sensor driver failed.
    Sensor(DeviceError),
    /// The alphanumeric display failed.
    Display(DeviceError),
    /// The LED strip failed.
    LedStrip(DeviceError),
    /// The telemetry link failed.
    Telemetry(TelemetryError),
    /// The device credential could not be loaded or parsed.
    Credential(CredentialError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor driver: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::LedStrip(e) => write!(f, "ledstrip: {e}"),
            Self::Telemetry(e) => write!(f, "telemetry: {e}"),
            Self::Credential(e) => write!(f, "credential: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Peripheral errors
// ---------------------------------------------------------------------------

/// Errors from the opaque peripheral handles (sensor bus, display, strip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Bus I/O failure (read, write or close).
    Io,
    /// The peripheral is already in use.
    Busy,
    /// The peripheral handle has been closed.
    Closed,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Busy => write!(f, "device busy"),
            Self::Closed => write!(f, "device closed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Telemetry errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    /// The connection to the ingestion endpoint could not be established.
    ConnectFailed,
    /// Publish was attempted without a live connection.
    NotConnected,
    /// The link reported a publish failure.
    PublishFailed,
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectFailed => write!(f, "connect failed"),
            Self::NotConnected => write!(f, "not connected"),
            Self::PublishFailed => write!(f, "publish failed"),
        }
    }
}

impl From<TelemetryError> for Error {
    fn from(e: TelemetryError) -> Self {
        Self::Telemetry(e)
    }
}

// ---------------------------------------------------------------------------
// Credential errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// No key material exists under the requested resource identifier.
    NotFound,
    /// The bytes are not a valid PKCS8 private key.
    InvalidKeySpec,
    /// The key uses an algorithm other than RSA.
    UnsupportedAlgorithm,
    /// The key store itself failed.
    Io,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "key resource not found"),
            Self::InvalidKeySpec => write!(f, "invalid key spec"),
            Self::UnsupportedAlgorithm => write!(f, "algorithm not supported"),
            Self::Io => write!(f, "key store I/O error"),
        }
    }
}

impl From<CredentialError> for Error {
    fn from(e: CredentialError) -> Self {
        Self::Credential(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
