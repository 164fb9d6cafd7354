use super::samples::Samples;
use serde::{Deserialize, Serialize};

/// Where the satellite appears to a ground observer and where the sun is.
///
/// Angles are in degrees, height in meters above ground. Each altitude/azimuth
/// pair is one geometry sample; the height and the sun position apply to all
/// of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverGeometry {
    pub sat_height: f64,
    pub sat_altitude: Samples,
    pub sat_azimuth: Samples,
    pub sun_altitude: f64,
    pub sun_azimuth: f64,
}

impl ObserverGeometry {
    pub fn new(
        sat_height: f64,
        sat_altitude: impl Into<Samples>,
        sat_azimuth: impl Into<Samples>,
        sun_altitude: f64,
        sun_azimuth: f64,
    ) -> Self {
        ObserverGeometry {
            sat_height,
            sat_altitude: sat_altitude.into(),
            sat_azimuth: sat_azimuth.into(),
            sun_altitude,
            sun_azimuth,
        }
    }

    /// Number of geometry samples, taken from the altitude samples
    pub fn sample_count(&self) -> usize {
        self.sat_altitude.len()
    }

    /// Height repeated once per geometry sample
    pub fn broadcast_heights(&self) -> Samples {
        Samples::broadcast(self.sat_height, self.sample_count())
    }
}
