//! # Frame Decoder
//!
//! Decodes received buffers back into telemetry records or sentinel errors.

use super::wire::*;
use crate::error::{Result, TelemetryError};
use crate::record::TelemetryRecord;

/// Decode a complete frame
///
/// # Arguments
///
/// * `frame` - A received buffer, expected to be exactly [`PACKET_SIZE`] bytes
///
/// # Returns
///
/// * `Result<Packet>` - The decoded record or sentinel error
///
/// # Errors
///
/// Returns [`TelemetryError::MalformedPacket`] if:
/// - The buffer length does not match the fixed frame size
/// - The tag byte is not a known frame kind
/// - An error frame carries an unknown sentinel
pub fn decode_frame(frame: &[u8]) -> Result<Packet> {
    if frame.len() != PACKET_SIZE {
        return Err(TelemetryError::MalformedPacket(
            format!("expected {} bytes, got {}", PACKET_SIZE, frame.len())
        ));
    }

    match frame[0] {
        FRAME_TAG_TELEMETRY => Ok(Packet::Telemetry(decode_record(&frame[1..]))),
        FRAME_TAG_ERROR => {
            let sentinel = &frame[1..1 + ERROR_CODE_SIZE];
            match ErrorCode::from_sentinel(sentinel) {
                Some(code) => Ok(Packet::Error(code)),
                None => Err(TelemetryError::MalformedPacket(
                    format!("unknown sentinel: {:02X?}", sentinel)
                )),
            }
        }
        tag => Err(TelemetryError::MalformedPacket(
            format!("unknown frame tag: 0x{:02X}", tag)
        )),
    }
}

/// Rebuild a record from the 56-byte numeric payload
///
/// Field order matches the encoder: top speed, speed, start altitude, max
/// altitude, altitude, latitude, longitude.
fn decode_record(payload: &[u8]) -> TelemetryRecord {
    let mut fields = [0.0f64; RECORD_FIELD_COUNT];
    for (i, field) in fields.iter_mut().enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&payload[i * 8..(i + 1) * 8]);
        *field = f64::from_be_bytes(bytes);
    }

    TelemetryRecord {
        top_speed: fields[0],
        speed: fields[1],
        start_altitude: Some(fields[2]),
        max_altitude: fields[3],
        altitude: fields[4],
        latitude: fields[5],
        longitude: fields[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::encoder::{encode_error_frame, encode_telemetry_frame};

    fn sample_record() -> TelemetryRecord {
        let mut record = TelemetryRecord::new();
        record.update(10.0, 100.0, 37.7749, -122.4194);
        record.update(25.0, 150.0, 37.7750, -122.4195);
        record.update(15.0, 120.0, 37.7751, -122.4196);
        record
    }

    #[test]
    fn test_round_trip_record() {
        let record = sample_record();
        let frame = encode_telemetry_frame(&record);

        let decoded = decode_frame(&frame).unwrap();
        assert_eq!(decoded, Packet::Telemetry(record));
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let record = sample_record();
        let frame = encode_telemetry_frame(&record);

        match decode_frame(&frame).unwrap() {
            Packet::Telemetry(decoded) => {
                assert_eq!(decoded.top_speed, 25.0);
                assert_eq!(decoded.speed, 15.0);
                assert_eq!(decoded.start_altitude, Some(100.0));
                assert_eq!(decoded.max_altitude, 150.0);
                assert_eq!(decoded.altitude, 120.0);
                assert_eq!(decoded.latitude, 37.7751);
                assert_eq!(decoded.longitude, -122.4196);
            }
            other => panic!("Expected telemetry packet, got: {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_negative_and_fractional_values() {
        let mut record = TelemetryRecord::new();
        record.update(0.125, -42.75, -33.8688, 151.2093);

        let decoded = decode_frame(&encode_telemetry_frame(&record)).unwrap();
        assert_eq!(decoded, Packet::Telemetry(record));
    }

    #[test]
    fn test_round_trip_error_codes() {
        for code in [ErrorCode::NoGpsFix, ErrorCode::InsufficientSatellites] {
            let frame = encode_error_frame(code);
            assert_eq!(decode_frame(&frame).unwrap(), Packet::Error(code));
        }
    }

    #[test]
    fn test_decode_empty_buffer_is_malformed() {
        let result = decode_frame(&[]);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_short_buffer_is_malformed() {
        let result = decode_frame(&[FRAME_TAG_TELEMETRY; 10]);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_truncated_frame_is_malformed() {
        let mut frame = encode_telemetry_frame(&sample_record());
        frame.truncate(PACKET_SIZE - 1);

        let result = decode_frame(&frame);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_oversized_buffer_is_malformed() {
        let mut frame = encode_telemetry_frame(&sample_record());
        frame.push(0x00);

        let result = decode_frame(&frame);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_unknown_tag_is_malformed() {
        let mut frame = encode_telemetry_frame(&sample_record());
        frame[0] = 0x7F;

        let result = decode_frame(&frame);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_unknown_sentinel_is_malformed() {
        let mut frame = encode_error_frame(ErrorCode::NoGpsFix);
        frame[1..5].copy_from_slice(b"ERR9");

        let result = decode_frame(&frame);
        assert!(matches!(result, Err(TelemetryError::MalformedPacket(_))));
    }

    #[test]
    fn test_decode_ignores_error_frame_padding() {
        // Receivers are tolerant of non-zero padding after the sentinel
        let mut frame = encode_error_frame(ErrorCode::InsufficientSatellites);
        frame[10] = 0xAB;
        frame[PACKET_SIZE - 1] = 0xCD;

        let decoded = decode_frame(&frame).unwrap();
        assert_eq!(decoded, Packet::Error(ErrorCode::InsufficientSatellites));
    }
}
