//! Observer-frame geometry on a spherical earth.
//!
//! The observer frame is east-north-up centred on the observer, with the
//! geocentre at `(0, 0, -R_EARTH)`. The satellite body frame has +z along the
//! geocentric radial, +y along the horizontal direction of the sun as seen
//! from the satellite and +x = y × z.

use crate::constants::R_EARTH;
use nalgebra as na;

/// Unit vector toward a horizontal-coordinate direction, angles in degrees.
/// Azimuth is measured from north through east.
pub fn horizontal_to_unit(altitude_deg: f64, azimuth_deg: f64) -> na::Vector3<f64> {
    let alt = altitude_deg.to_radians();
    let az = azimuth_deg.to_radians();
    na::Vector3::new(alt.cos() * az.sin(), alt.cos() * az.cos(), alt.sin())
}

/// Distance from the observer to a satellite `height` meters above the
/// ground, seen at `altitude_deg` above the horizon.
pub fn slant_range(height: f64, altitude_deg: f64) -> f64 {
    let sin_alt = altitude_deg.to_radians().sin();
    let orbit_radius = R_EARTH + height;
    -R_EARTH * sin_alt + (R_EARTH.powi(2) * sin_alt.powi(2) + orbit_radius.powi(2) - R_EARTH.powi(2)).sqrt()
}

pub fn geocentre() -> na::Vector3<f64> {
    na::Vector3::new(0.0, 0.0, -R_EARTH)
}

/// Satellite position relative to the observer and to the earth.
#[derive(Debug, Clone)]
pub struct SatellitePosition {
    /// Observer to satellite, observer frame (m)
    pub relative: na::Vector3<f64>,
    /// Geocentre to satellite, observer frame axes (m)
    pub geocentric: na::Vector3<f64>,
    pub range: f64,
}

impl SatellitePosition {
    pub fn locate(height: f64, altitude_deg: f64, azimuth_deg: f64) -> Self {
        let range = slant_range(height, altitude_deg);
        let relative = horizontal_to_unit(altitude_deg, azimuth_deg) * range;
        SatellitePosition {
            relative,
            geocentric: relative - geocentre(),
            range,
        }
    }

    /// Unit vector from the satellite back to the observer
    pub fn to_observer(&self) -> na::Vector3<f64> {
        -self.relative.normalize()
    }
}

/// Rotation from the satellite body frame into the observer frame.
#[derive(Debug, Clone)]
pub struct SatelliteFrame {
    rotation: na::Matrix3<f64>,
}

impl SatelliteFrame {
    pub fn new(geocentric: &na::Vector3<f64>, sun: &na::Vector3<f64>) -> Self {
        let z = geocentric.normalize();
        // Sun straight overhead or underfoot leaves no horizontal direction; fall back to north, then east
        let y = [*sun, na::Vector3::y(), na::Vector3::x()]
            .iter()
            .find_map(|d| (d - d.dot(&z) * z).try_normalize(1e-12))
            .unwrap_or_else(na::Vector3::y);
        let x = y.cross(&z);

        SatelliteFrame {
            rotation: na::Matrix3::from_columns(&[x, y, z]),
        }
    }

    pub fn to_observer(&self, body: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.rotation * body
    }

    pub fn rotation(&self) -> &na::Matrix3<f64> {
        &self.rotation
    }
}

/// Cylindrical earth shadow test for a geocentric position and sun direction.
pub fn in_earth_shadow(geocentric: &na::Vector3<f64>, sun: &na::Vector3<f64>) -> bool {
    let along_sun = geocentric.dot(sun);
    if along_sun >= 0.0 {
        return false;
    }
    (geocentric - along_sun * sun).magnitude() < R_EARTH
}
