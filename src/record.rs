//! # Telemetry Record
//!
//! The single data entity exchanged over the link: a fixed-shape reading of
//! speed, altitude, and position, plus the running extrema tracked across the
//! transmitter's lifetime.

/// One telemetry reading plus lifetime extrema
///
/// The transmitter owns exactly one live record, mutated once per beat via
/// [`TelemetryRecord::update`]. The receiver reconstructs a fresh record from
/// each decoded packet; it has no identity beyond "most recently received".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetryRecord {
    /// Maximum speed achieved since transmitter start
    pub top_speed: f64,

    /// Current speed
    pub speed: f64,

    /// Altitude captured at the first usable fix; `None` until then
    pub start_altitude: Option<f64>,

    /// Maximum altitude achieved
    pub max_altitude: f64,

    /// Current altitude
    pub altitude: f64,

    /// Current latitude in degrees
    pub latitude: f64,

    /// Current longitude in degrees
    pub longitude: f64,
}

impl TelemetryRecord {
    /// Create a record with all fields zeroed and the start altitude unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one sampling cycle's readings
    ///
    /// Sets the instantaneous fields to the given values, raises `top_speed`
    /// and `max_altitude` if exceeded, and captures `start_altitude` on the
    /// first call. Inputs are assumed pre-validated by the validity gate, so
    /// there is no error path.
    ///
    /// # Arguments
    ///
    /// * `speed` - Instantaneous speed (non-negative)
    /// * `altitude` - Instantaneous altitude
    /// * `latitude` - Current latitude in degrees
    /// * `longitude` - Current longitude in degrees
    pub fn update(&mut self, speed: f64, altitude: f64, latitude: f64, longitude: f64) {
        self.speed = speed;
        self.altitude = altitude;
        self.latitude = latitude;
        self.longitude = longitude;

        self.top_speed = self.top_speed.max(speed);
        self.max_altitude = self.max_altitude.max(altitude);

        if self.start_altitude.is_none() {
            self.start_altitude = Some(altitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zeroed() {
        let record = TelemetryRecord::new();
        assert_eq!(record.speed, 0.0);
        assert_eq!(record.top_speed, 0.0);
        assert_eq!(record.altitude, 0.0);
        assert_eq!(record.max_altitude, 0.0);
        assert_eq!(record.start_altitude, None);
        assert_eq!(record.latitude, 0.0);
        assert_eq!(record.longitude, 0.0);
    }

    #[test]
    fn test_top_speed_tracks_maximum() {
        let mut record = TelemetryRecord::new();
        for speed in [10.0, 25.0, 15.0] {
            record.update(speed, 0.0, 0.0, 0.0);
        }

        assert_eq!(record.speed, 15.0);
        assert_eq!(record.top_speed, 25.0);
    }

    #[test]
    fn test_top_speed_is_non_decreasing() {
        let mut record = TelemetryRecord::new();
        let mut previous_top = record.top_speed;

        for speed in [3.0, 8.0, 1.0, 8.0, 12.5, 0.0] {
            record.update(speed, 0.0, 0.0, 0.0);
            assert!(record.top_speed >= previous_top);
            assert!(record.top_speed >= record.speed);
            previous_top = record.top_speed;
        }

        assert_eq!(record.top_speed, 12.5);
    }

    #[test]
    fn test_altitude_extrema() {
        let mut record = TelemetryRecord::new();
        for altitude in [100.0, 150.0, 120.0] {
            record.update(0.0, altitude, 0.0, 0.0);
        }

        assert_eq!(record.altitude, 120.0);
        assert_eq!(record.start_altitude, Some(100.0));
        assert_eq!(record.max_altitude, 150.0);
    }

    #[test]
    fn test_start_altitude_set_once() {
        let mut record = TelemetryRecord::new();
        record.update(0.0, 42.0, 0.0, 0.0);
        record.update(0.0, 99.0, 0.0, 0.0);
        record.update(0.0, 7.0, 0.0, 0.0);

        assert_eq!(record.start_altitude, Some(42.0));
    }

    #[test]
    fn test_max_altitude_is_non_decreasing() {
        let mut record = TelemetryRecord::new();
        let mut previous_max = record.max_altitude;

        for altitude in [50.0, 30.0, 80.0, 80.0, 10.0] {
            record.update(0.0, altitude, 0.0, 0.0);
            assert!(record.max_altitude >= previous_max);
            assert!(record.max_altitude >= record.altitude);
            previous_max = record.max_altitude;
        }
    }

    #[test]
    fn test_position_is_refreshed_each_update() {
        let mut record = TelemetryRecord::new();
        record.update(5.0, 100.0, 37.7749, -122.4194);
        record.update(6.0, 101.0, 37.7750, -122.4195);

        assert_eq!(record.latitude, 37.7750);
        assert_eq!(record.longitude, -122.4195);
    }
}
