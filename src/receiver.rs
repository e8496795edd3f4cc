//! # Receive Consumer
//!
//! Drains inbound frames on the ground endpoint and forwards decoded results
//! to a display/logging collaborator.
//!
//! Decode failures are treated like garbled RF frames: logged, counted, and
//! discarded. They never crash or stall the poll loop; the next beat from the
//! transmitter supersedes whatever was lost.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, TelemetryError};
use crate::link::RadioLink;
use crate::packet::decoder::decode_frame;
use crate::packet::wire::{ErrorCode, Packet};
use crate::record::TelemetryRecord;

/// Consumer interface for decoded telemetry
///
/// Each record is a fresh value with no identity beyond "most recently
/// received"; sinks decide whether to keep history.
pub trait TelemetrySink: Send {
    /// Called for every decoded telemetry record
    fn on_record(&mut self, record: &TelemetryRecord);

    /// Called for every decoded sentinel error
    fn on_error(&mut self, code: ErrorCode);
}

/// Sink that writes decoded telemetry to the tracing diagnostics stream
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn on_record(&mut self, record: &TelemetryRecord) {
        info!(
            "Telemetry: speed {:.1} (top {:.1}), altitude {:.1} (start {:.1}, max {:.1}), position {:.4}, {:.4}",
            record.speed,
            record.top_speed,
            record.altitude,
            record.start_altitude.unwrap_or(0.0),
            record.max_altitude,
            record.latitude,
            record.longitude,
        );
    }

    fn on_error(&mut self, code: ErrorCode) {
        warn!("Transmitter reports degraded GPS: {}", code);
    }
}

/// Poll-driven receive loop feeding a telemetry sink
pub struct ReceiveConsumer<R, S> {
    radio: R,
    sink: S,
    poll_interval: Duration,
    frames_received: u64,
    frames_discarded: u64,
}

impl<R, S> ReceiveConsumer<R, S>
where
    R: RadioLink,
    S: TelemetrySink,
{
    /// Create a consumer from configuration and its collaborators
    pub fn new(config: &Config, radio: R, sink: S) -> Self {
        Self {
            radio,
            sink,
            poll_interval: Duration::from_millis(config.link.poll_interval_ms),
            frames_received: 0,
            frames_discarded: 0,
        }
    }

    /// Number of frames successfully decoded and forwarded
    pub fn frames_received(&self) -> u64 {
        self.frames_received
    }

    /// Number of malformed frames dropped
    pub fn frames_discarded(&self) -> u64 {
        self.frames_discarded
    }

    /// Poll the radio once
    ///
    /// Decodes at most one inbound frame and forwards it to the sink. A
    /// malformed frame is discarded and counted, equivalent in effect to a
    /// missed beat.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A frame was decoded and forwarded
    /// * `Ok(false)` - Nothing was queued, or the frame was discarded
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Radio`] only if the radio collaborator
    /// itself fails; decode failures are not errors.
    pub async fn poll_once(&mut self) -> Result<bool> {
        let buffer = self
            .radio
            .try_receive()
            .await
            .map_err(|e| TelemetryError::Radio(format!("Failed to poll radio: {}", e)))?;

        let Some(buffer) = buffer else {
            return Ok(false);
        };

        match decode_frame(&buffer) {
            Ok(Packet::Telemetry(record)) => {
                self.frames_received += 1;
                self.sink.on_record(&record);
                Ok(true)
            }
            Ok(Packet::Error(code)) => {
                self.frames_received += 1;
                self.sink.on_error(code);
                Ok(true)
            }
            Err(e) => {
                self.frames_discarded += 1;
                debug!("Discarding garbled frame ({} bytes): {}", buffer.len(), e);
                Ok(false)
            }
        }
    }

    /// Run the receive loop at the configured poll cadence
    ///
    /// Drains every queued frame on each tick so a slow poll interval cannot
    /// back the medium up.
    ///
    /// # Errors
    ///
    /// Returns the first radio failure.
    pub async fn run(&mut self) -> Result<()> {
        let mut poll = interval(self.poll_interval);

        info!(
            "Starting telemetry receive loop ({} ms poll)",
            self.poll_interval.as_millis()
        );

        loop {
            poll.tick().await;
            while self.poll_once().await? {}
        }
    }
}
