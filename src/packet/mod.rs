//! # Packet Codec Module
//!
//! Implementation of the fixed-size telemetry frame exchanged over the radio.
//!
//! This module handles:
//! - Wire constants and frame discrimination (tag byte)
//! - Telemetry record encoding (7 big-endian doubles)
//! - Sentinel error frame encoding (`"ERR1"` / `"ERR2"`)
//! - Frame decoding with malformed-packet rejection

pub mod wire;
pub mod encoder;
pub mod decoder;
