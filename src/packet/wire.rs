//! # Wire Format Constants and Types
//!
//! Core definitions of the telemetry frame layout.
//!
//! Every frame on the link is exactly [`PACKET_SIZE`] bytes and starts with a
//! tag byte that discriminates the payload kind. The original contract left
//! the discrimination between a numeric payload and a 4-character sentinel
//! undefined; the tag byte closes that gap explicitly.
//!
//! Frame layouts:
//! ```text
//! Telemetry: tag(0x01) + 7 × f64 big-endian (56 bytes)
//! Error:     tag(0x02) + 4 ASCII sentinel bytes + 52 zero-padding bytes
//! ```

use crate::record::TelemetryRecord;

/// Tag byte of a frame carrying a full telemetry record
pub const FRAME_TAG_TELEMETRY: u8 = 0x01;

/// Tag byte of a frame carrying a sentinel error code
pub const FRAME_TAG_ERROR: u8 = 0x02;

/// Number of numeric fields in a telemetry record
pub const RECORD_FIELD_COUNT: usize = 7;

/// Serialized size of the numeric payload (7 × 8-byte doubles)
pub const TELEMETRY_PAYLOAD_SIZE: usize = RECORD_FIELD_COUNT * 8;

/// Length of a sentinel error code on the wire
pub const ERROR_CODE_SIZE: usize = 4;

/// Fixed size of every frame on the link: tag byte + largest payload
pub const PACKET_SIZE: usize = 1 + TELEMETRY_PAYLOAD_SIZE;

/// Sentinel transmitted when the GPS reports no data (mirrors `"ERR1"`)
pub const NO_GPS_SENTINEL: &[u8; ERROR_CODE_SIZE] = b"ERR1";

/// Sentinel transmitted when too few satellites are visible (mirrors `"ERR2"`)
pub const NO_SATS_SENTINEL: &[u8; ERROR_CODE_SIZE] = b"ERR2";

/// Link-reported error condition substituted for telemetry when GPS data is unusable
///
/// Both conditions are recoverable: the transmitter keeps sending sentinels at
/// the normal cadence so the receiver can tell a GPS outage from a dead link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No GPS data / no valid sentence this cycle
    NoGpsFix,

    /// GPS data present but satellite count below the configured minimum
    InsufficientSatellites,
}

impl ErrorCode {
    /// The exact sentinel bytes for this code
    pub fn sentinel(&self) -> &'static [u8; ERROR_CODE_SIZE] {
        match self {
            ErrorCode::NoGpsFix => NO_GPS_SENTINEL,
            ErrorCode::InsufficientSatellites => NO_SATS_SENTINEL,
        }
    }

    /// Look up the code for a received sentinel, if it matches a known literal
    pub fn from_sentinel(bytes: &[u8]) -> Option<Self> {
        if bytes == NO_GPS_SENTINEL.as_slice() {
            Some(ErrorCode::NoGpsFix)
        } else if bytes == NO_SATS_SENTINEL.as_slice() {
            Some(ErrorCode::InsufficientSatellites)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NoGpsFix => write!(f, "no GPS fix (ERR1)"),
            ErrorCode::InsufficientSatellites => write!(f, "insufficient satellites (ERR2)"),
        }
    }
}

/// One decoded frame: either a full record or a sentinel error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Packet {
    /// A full telemetry record produced during a usable cycle
    Telemetry(TelemetryRecord),

    /// A sentinel error produced while GPS data was unusable
    Error(ErrorCode),
}
