//! # Transmit Scheduler
//!
//! Drives the sampling/transmit loop on the vehicle endpoint.
//!
//! Each beat: read the GPS and speed sensor collaborators, run the validity
//! gate, and send either the updated telemetry record or a sentinel error
//! frame. The link is fire-and-forget: no acknowledgment, no retry, and a
//! lost frame is superseded by the next beat.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, TelemetryError};
use crate::gps::{GateResult, GpsSource, ValidityGate};
use crate::link::RadioLink;
use crate::packet::encoder::{encode_error_frame, encode_telemetry_frame};
use crate::record::TelemetryRecord;

/// Number of beats between status log messages (~5 seconds at the 200 ms beat)
const LOG_INTERVAL_BEATS: u64 = 25;

/// Collaborator interface for the vehicle speed sensor
pub trait SpeedSensor: Send {
    fn read(&mut self) -> f64;
}

/// Beat-driven transmit loop owning the live telemetry record
///
/// The record is owned exclusively by the scheduler; extrema survive GPS
/// outages because rejected cycles never touch it.
pub struct TransmitScheduler<R, G, S> {
    radio: R,
    gps: G,
    sensor: S,
    gate: ValidityGate,
    record: TelemetryRecord,
    beat_interval: Duration,
    beats_sent: u64,
}

impl<R, G, S> TransmitScheduler<R, G, S>
where
    R: RadioLink,
    G: GpsSource,
    S: SpeedSensor,
{
    /// Create a scheduler from configuration and its collaborators
    pub fn new(config: &Config, radio: R, gps: G, sensor: S) -> Self {
        Self {
            radio,
            gps,
            sensor,
            gate: ValidityGate::from_config(&config.gps),
            record: TelemetryRecord::new(),
            beat_interval: Duration::from_millis(config.link.beat_interval_ms),
            beats_sent: 0,
        }
    }

    /// The live telemetry record
    pub fn record(&self) -> &TelemetryRecord {
        &self.record
    }

    /// Total number of frames sent so far
    pub fn beats_sent(&self) -> u64 {
        self.beats_sent
    }

    /// Run one sampling/transmit cycle
    ///
    /// On a usable GPS read the record is updated and sent as a telemetry
    /// frame; otherwise the matching sentinel frame is sent and the record is
    /// left untouched, so a transient outage never corrupts the extrema.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Radio`] if the radio collaborator fails.
    pub async fn beat(&mut self) -> Result<()> {
        let frame = match self.gate.classify(self.gps.read()) {
            GateResult::Usable(fix) => {
                let speed = self.sensor.read();
                self.record.update(speed, fix.altitude, fix.latitude, fix.longitude);
                encode_telemetry_frame(&self.record)
            }
            GateResult::Rejected(code) => {
                debug!("GPS unusable this beat: {}", code);
                encode_error_frame(code)
            }
        };

        self.radio
            .send(&frame)
            .await
            .map_err(|e| TelemetryError::Radio(format!("Failed to send frame: {}", e)))?;

        self.beats_sent += 1;
        debug!("Sent telemetry frame ({} bytes)", frame.len());
        Ok(())
    }

    /// Run the transmit loop at the configured beat cadence
    ///
    /// The beat is best-effort, not a hard real-time deadline: the await on
    /// the interval yields cooperatively instead of blocking the thread, so
    /// other tasks interleave freely.
    ///
    /// # Errors
    ///
    /// Returns the first radio failure; GPS outages are not failures.
    pub async fn run(&mut self) -> Result<()> {
        let mut beat = interval(self.beat_interval);
        let mut last_log_count: u64 = 0;

        info!(
            "Starting telemetry transmit loop ({} ms beat)",
            self.beat_interval.as_millis()
        );

        loop {
            beat.tick().await;
            self.beat().await?;

            if self.beats_sent - last_log_count >= LOG_INTERVAL_BEATS {
                info!(
                    "Sent {} frames (top speed {:.1}, max altitude {:.1})",
                    self.beats_sent, self.record.top_speed, self.record.max_altitude
                );
                last_log_count = self.beats_sent;
            }
        }
    }
}
