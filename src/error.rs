//! # Error Types
//!
//! Custom error types for RC Telemetry using `thiserror`.
//!
//! Link-level faults (no GPS fix, insufficient satellites) are deliberately
//! *not* represented here: they travel over the radio as sentinel payloads so
//! the receiver can tell "link alive, GPS down" apart from "link dead". See
//! [`crate::packet::wire::ErrorCode`].

use thiserror::Error;

/// Main error type for RC Telemetry
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A received buffer does not match any known frame encoding
    #[error("malformed packet: {0}")]
    MalformedPacket(String),

    /// Radio link errors
    #[error("radio error: {0}")]
    Radio(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for RC Telemetry
pub type Result<T> = std::result::Result<T, TelemetryError>;
