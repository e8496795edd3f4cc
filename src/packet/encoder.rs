//! # Frame Encoder
//!
//! Serializes telemetry records and sentinel errors into fixed-size frames.

use super::wire::*;
use crate::record::TelemetryRecord;

/// Encode a telemetry record into a complete frame
///
/// The seven numeric fields are written as big-endian IEEE-754 doubles in the
/// contract's struct order: top speed, speed, start altitude, max altitude,
/// altitude, latitude, longitude. An unset start altitude encodes as `0.0`,
/// but records only reach the encoder after a usable cycle has set it.
///
/// # Arguments
///
/// * `record` - The record to serialize
///
/// # Returns
///
/// * `Vec<u8>` - Complete frame ([`PACKET_SIZE`] bytes: tag + 56-byte payload)
///
/// # Examples
///
/// ```
/// use rc_telemetry::packet::encoder::encode_telemetry_frame;
/// use rc_telemetry::packet::wire::PACKET_SIZE;
/// use rc_telemetry::record::TelemetryRecord;
///
/// let mut record = TelemetryRecord::new();
/// record.update(12.5, 104.0, 37.7749, -122.4194);
/// let frame = encode_telemetry_frame(&record);
/// assert_eq!(frame.len(), PACKET_SIZE);
/// ```
pub fn encode_telemetry_frame(record: &TelemetryRecord) -> Vec<u8> {
    let mut frame = Vec::with_capacity(PACKET_SIZE);
    frame.push(FRAME_TAG_TELEMETRY);

    let fields = [
        record.top_speed,
        record.speed,
        record.start_altitude.unwrap_or(0.0),
        record.max_altitude,
        record.altitude,
        record.latitude,
        record.longitude,
    ];

    for field in fields {
        frame.extend_from_slice(&field.to_be_bytes());
    }

    frame
}

/// Encode a sentinel error into a complete frame
///
/// The 4 ASCII bytes of the sentinel literal follow the tag; the rest of the
/// frame is zero padding so every frame on the link is the same size.
///
/// # Arguments
///
/// * `code` - The error condition to encode
///
/// # Returns
///
/// * `Vec<u8>` - Complete frame ([`PACKET_SIZE`] bytes: tag + sentinel + padding)
pub fn encode_error_frame(code: ErrorCode) -> Vec<u8> {
    let mut frame = vec![0u8; PACKET_SIZE];
    frame[0] = FRAME_TAG_ERROR;
    frame[1..1 + ERROR_CODE_SIZE].copy_from_slice(code.sentinel());
    frame
}

/// Encode either form of packet into a complete frame
pub fn encode_packet(packet: &Packet) -> Vec<u8> {
    match packet {
        Packet::Telemetry(record) => encode_telemetry_frame(record),
        Packet::Error(code) => encode_error_frame(*code),
    }
}
