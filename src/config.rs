//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! Every tunable of the link lives here so both endpoints can be built from
//! one immutable [`Config`] value instead of process-wide globals: the shared
//! radio address and channel, the transmit beat, the receiver poll interval,
//! the GPS satellite policy, and the local debug serial rate.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Highest logical channel accepted by the 2.4 GHz radio modules
const MAX_RADIO_CHANNEL: u8 = 125;

/// Radio addresses are 40 bits wide on the wire
const MAX_RADIO_ADDRESS: u64 = 0xFF_FFFF_FFFF;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub link: LinkConfig,

    #[serde(default)]
    pub gps: GpsConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Radio link configuration shared by transmitter and receiver
#[derive(Debug, Deserialize, Clone)]
pub struct LinkConfig {
    /// 40-bit pipe address both endpoints tune to
    #[serde(default = "default_radio_address")]
    pub address: u64,

    /// Logical radio channel number
    #[serde(default = "default_radio_channel")]
    pub channel: u8,

    /// Milliseconds between transmit beats
    #[serde(default = "default_beat_interval_ms")]
    pub beat_interval_ms: u64,

    /// Milliseconds between receiver polls for an inbound buffer
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// GPS validity policy
#[derive(Debug, Deserialize, Clone)]
pub struct GpsConfig {
    /// Minimum satellite count for a reading to be considered usable
    #[serde(default = "default_min_satellites")]
    pub min_satellites: u8,
}

/// Local debug serial configuration (diagnostics only, not part of the wire protocol)
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    #[serde(default = "default_debug_baud_rate")]
    pub baud_rate: u32,
}

// Default value functions
fn default_radio_address() -> u64 { 0xF0F0_F0F0_E1 }
fn default_radio_channel() -> u8 { 108 }
fn default_beat_interval_ms() -> u64 { 200 }
fn default_poll_interval_ms() -> u64 { 50 }

fn default_min_satellites() -> u8 { 4 }

fn default_debug_baud_rate() -> u32 { 9600 }

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            address: default_radio_address(),
            channel: default_radio_channel(),
            beat_interval_ms: default_beat_interval_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for GpsConfig {
    fn default() -> Self {
        Self {
            min_satellites: default_min_satellites(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            baud_rate: default_debug_baud_rate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link: LinkConfig::default(),
            gps: GpsConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rc_telemetry::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Returns
    ///
    /// * `Result<()>` - Ok if valid, Err if invalid
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        // Validate link configuration
        if self.link.address == 0 {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("link address cannot be zero")
            ));
        }

        if self.link.address > MAX_RADIO_ADDRESS {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("link address must fit in 40 bits")
            ));
        }

        if self.link.channel > MAX_RADIO_CHANNEL {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom(format!("channel must be between 0 and {}", MAX_RADIO_CHANNEL))
            ));
        }

        // Validate timing fields
        if self.link.beat_interval_ms == 0 || self.link.beat_interval_ms > 60000 {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("beat_interval_ms must be between 1 and 60000")
            ));
        }

        if self.link.poll_interval_ms == 0 || self.link.poll_interval_ms > 60000 {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("poll_interval_ms must be between 1 and 60000")
            ));
        }

        // Validate GPS policy
        if self.gps.min_satellites == 0 {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("min_satellites must be greater than 0")
            ));
        }

        // Validate debug baud rate
        if ![4800, 9600, 19200, 38400, 57600, 115200].contains(&self.debug.baud_rate) {
            return Err(crate::error::TelemetryError::Config(
                toml::de::Error::custom("baud_rate must be one of: 4800, 9600, 19200, 38400, 57600, 115200")
            ));
        }

        Ok(())
    }
}
