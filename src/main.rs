//! # RC Telemetry
//!
//! Demo binary for the RC telemetry link core.
//!
//! Runs both endpoints of the link over an in-process loopback radio: a
//! transmit scheduler fed by a simulated GPS and speed sensor, and a receive
//! consumer that logs every decoded frame. The simulation periodically drops
//! the GPS fix so the sentinel path is visible in the output.

use anyhow::Result;
use tracing::info;

use rc_telemetry::config::Config;
use rc_telemetry::gps::{GpsReading, GpsSource};
use rc_telemetry::link::loopback_pair;
use rc_telemetry::receiver::{LogSink, ReceiveConsumer};
use rc_telemetry::transmitter::{SpeedSensor, TransmitScheduler};

/// Deterministic GPS simulation with periodic fix dropouts
struct SimulatedGps {
    cycle: u64,
}

impl SimulatedGps {
    fn new() -> Self {
        Self { cycle: 0 }
    }
}

impl GpsSource for SimulatedGps {
    fn read(&mut self) -> Option<GpsReading> {
        self.cycle += 1;

        // Every 40th cycle the module reports nothing; shortly before that
        // the constellation thins out below the usable minimum
        if self.cycle % 40 == 0 {
            return None;
        }
        let sat_count = if self.cycle % 40 >= 37 { 3 } else { 8 };

        // Gentle climb followed by descent, drifting north-east
        let phase = (self.cycle % 200) as f64;
        let altitude = 100.0 + if phase < 100.0 { phase } else { 200.0 - phase };

        Some(GpsReading {
            latitude: 37.7749 + self.cycle as f64 * 1e-5,
            longitude: -122.4194 + self.cycle as f64 * 1e-5,
            altitude,
            sat_count,
        })
    }
}

/// Triangle-wave speed simulation
struct SimulatedSpeedSensor {
    cycle: u64,
}

impl SimulatedSpeedSensor {
    fn new() -> Self {
        Self { cycle: 0 }
    }
}

impl SpeedSensor for SimulatedSpeedSensor {
    fn read(&mut self) -> f64 {
        self.cycle += 1;
        let phase = (self.cycle % 60) as f64;
        if phase < 30.0 { phase } else { 60.0 - phase }
    }
}

/// Main entry point for the RC Telemetry demo
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load configuration (path from the first argument, defaults otherwise)
///    - Create the loopback radio pair
///
/// 2. **Main Loop**
///    - Receive consumer runs as a background task, logging decoded frames
///    - Transmit scheduler beats at the configured cadence (200 ms default)
///    - Handle Ctrl+C for graceful shutdown
///
/// # Errors
///
/// Returns error if the configuration file is invalid or a loop aborts on a
/// radio failure.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("RC Telemetry v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };

    info!(
        "Link: address 0x{:010X}, channel {}, beat {} ms, min satellites {}",
        config.link.address,
        config.link.channel,
        config.link.beat_interval_ms,
        config.gps.min_satellites
    );

    let (vehicle_radio, ground_radio) = loopback_pair();

    let mut consumer = ReceiveConsumer::new(&config, ground_radio, LogSink);
    let receiver_task = tokio::spawn(async move { consumer.run().await });

    let mut scheduler = TransmitScheduler::new(
        &config,
        vehicle_radio,
        SimulatedGps::new(),
        SimulatedSpeedSensor::new(),
    );

    info!("Press Ctrl+C to exit");

    tokio::select! {
        result = scheduler.run() => {
            result?;
        }

        // Handle Ctrl+C for graceful shutdown
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    info!("Total frames sent: {}", scheduler.beats_sent());
    receiver_task.abort();
    Ok(())
}
