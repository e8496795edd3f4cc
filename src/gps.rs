//! # GPS Validity Gate
//!
//! Classifies each sampling cycle's GPS read as usable or not before any
//! record update or transmission happens.
//!
//! Classification is pure and per-cycle: no state is retained, so a transient
//! loss of fix never poisons later cycles.

use crate::config::GpsConfig;
use crate::packet::wire::ErrorCode;

/// One GPS reading as reported by the GPS collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsReading {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Altitude in meters
    pub altitude: f64,

    /// Number of satellites in the fix
    pub sat_count: u8,
}

/// Collaborator interface for the GPS module driver
///
/// Returns `None` when no valid sentence was available this cycle.
pub trait GpsSource: Send {
    fn read(&mut self) -> Option<GpsReading>;
}

/// Outcome of classifying one cycle's GPS read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateResult {
    /// Data is trustworthy; carries the reading that passed the gate
    Usable(GpsReading),

    /// Data is unusable this cycle; carries the sentinel to transmit instead
    Rejected(ErrorCode),
}

/// Per-cycle GPS validity policy
#[derive(Debug, Clone, Copy)]
pub struct ValidityGate {
    min_satellites: u8,
}

impl ValidityGate {
    /// Create a gate requiring at least `min_satellites` satellites
    pub fn new(min_satellites: u8) -> Self {
        Self { min_satellites }
    }

    /// Create a gate from the configured GPS policy
    pub fn from_config(config: &GpsConfig) -> Self {
        Self::new(config.min_satellites)
    }

    /// Classify one cycle's GPS read
    ///
    /// # Arguments
    ///
    /// * `reading` - The GPS read for this cycle, or `None` if the driver had
    ///   no valid data
    ///
    /// # Returns
    ///
    /// * `GateResult::Usable` when data is present with enough satellites
    /// * `GateResult::Rejected(ErrorCode::NoGpsFix)` when no data was read
    /// * `GateResult::Rejected(ErrorCode::InsufficientSatellites)` when the
    ///   satellite count is below the configured minimum
    pub fn classify(&self, reading: Option<GpsReading>) -> GateResult {
        match reading {
            None => GateResult::Rejected(ErrorCode::NoGpsFix),
            Some(r) if r.sat_count < self.min_satellites => {
                GateResult::Rejected(ErrorCode::InsufficientSatellites)
            }
            Some(r) => GateResult::Usable(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_with_sats(sat_count: u8) -> GpsReading {
        GpsReading {
            latitude: 37.7749,
            longitude: -122.4194,
            altitude: 100.0,
            sat_count,
        }
    }

    #[test]
    fn test_no_reading_is_no_gps_fix() {
        let gate = ValidityGate::new(4);
        assert_eq!(gate.classify(None), GateResult::Rejected(ErrorCode::NoGpsFix));
    }

    #[test]
    fn test_below_minimum_is_insufficient_satellites() {
        let gate = ValidityGate::new(4);
        assert_eq!(
            gate.classify(Some(reading_with_sats(3))),
            GateResult::Rejected(ErrorCode::InsufficientSatellites)
        );
    }

    #[test]
    fn test_at_minimum_is_usable() {
        let gate = ValidityGate::new(4);
        let reading = reading_with_sats(4);
        assert_eq!(gate.classify(Some(reading)), GateResult::Usable(reading));
    }

    #[test]
    fn test_above_minimum_is_usable() {
        let gate = ValidityGate::new(4);
        let reading = reading_with_sats(12);
        assert_eq!(gate.classify(Some(reading)), GateResult::Usable(reading));
    }

    #[test]
    fn test_alternate_policy_minimum_one() {
        // Bench-testing policy: any fix at all counts
        let gate = ValidityGate::new(1);
        let reading = reading_with_sats(1);
        assert_eq!(gate.classify(Some(reading)), GateResult::Usable(reading));
        assert_eq!(gate.classify(None), GateResult::Rejected(ErrorCode::NoGpsFix));
    }

    #[test]
    fn test_each_cycle_judged_independently() {
        // A rejected cycle must not affect the next one
        let gate = ValidityGate::new(4);
        assert_eq!(gate.classify(None), GateResult::Rejected(ErrorCode::NoGpsFix));

        let recovered = reading_with_sats(6);
        assert_eq!(gate.classify(Some(recovered)), GateResult::Usable(recovered));
    }

    #[test]
    fn test_from_config_uses_configured_minimum() {
        let config = crate::config::GpsConfig { min_satellites: 6 };
        let gate = ValidityGate::from_config(&config);

        assert_eq!(
            gate.classify(Some(reading_with_sats(5))),
            GateResult::Rejected(ErrorCode::InsufficientSatellites)
        );
        let reading = reading_with_sats(6);
        assert_eq!(gate.classify(Some(reading)), GateResult::Usable(reading));
    }
}
