//! # RC Telemetry Library
//!
//! Shared telemetry link core for an RC vehicle transmitter and ground receiver.
//!
//! This library provides the wire-level packet format, the beat-based link
//! discipline, and the GPS validity gating shared by both endpoints of a
//! low-bandwidth radio telemetry link.

pub mod config;
pub mod error;
pub mod gps;
pub mod link;
pub mod packet;
pub mod record;
pub mod receiver;
pub mod transmitter;
