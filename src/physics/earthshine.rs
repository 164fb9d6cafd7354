use super::geometry::{geocentre, SatellitePosition};
use crate::constants::{PI, R_EARTH, SUN_INTENSITY};
use crate::models::Brdf;
use nalgebra as na;

/// A patch of the earth's surface, observer frame.
#[derive(Debug, Clone)]
pub struct EarthPanel {
    pub position: na::Vector3<f64>,
    pub normal: na::Vector3<f64>,
    pub area: f64,
}

/// Splits the cap of earth visible from the satellite into `density` rings of
/// `density` panels each, centred on the sub-satellite point.
pub fn visible_earth_panels(position: &SatellitePosition, density: usize) -> Vec<EarthPanel> {
    if density == 0 {
        return Vec::new();
    }

    let pole = position.geocentric.normalize();
    let cap_angle = (R_EARTH / position.geocentric.magnitude()).min(1.0).acos();
    let (east, north) = tangent_basis(&pole);

    let d_polar = cap_angle / density as f64;
    let d_azimuth = 2.0 * PI / density as f64;

    let mut panels = Vec::with_capacity(density * density);
    for i in 0..density {
        let polar = (i as f64 + 0.5) * d_polar;
        let area = R_EARTH.powi(2) * polar.sin() * d_polar * d_azimuth;
        for j in 0..density {
            let azimuth = (j as f64 + 0.5) * d_azimuth;
            let normal = polar.cos() * pole
                + polar.sin() * (azimuth.cos() * east + azimuth.sin() * north);
            panels.push(EarthPanel {
                position: geocentre() + R_EARTH * normal,
                normal,
                area,
            });
        }
    }
    panels
}

/// Sunlight reflected off the earth onto the satellite.
///
/// Returns, for each sunlit panel facing the satellite, the direction from
/// the satellite toward the panel and the irradiance (W/m^2) it delivers.
pub fn earthshine_irradiance(
    position: &SatellitePosition,
    sun: &na::Vector3<f64>,
    density: usize,
    earth_brdf: &Brdf,
) -> Vec<(na::Vector3<f64>, f64)> {
    visible_earth_panels(position, density)
        .into_iter()
        .filter_map(|panel| {
            let cos_sun = panel.normal.dot(sun);
            if cos_sun <= 0.0 {
                return None;
            }

            let to_satellite = position.relative - panel.position;
            let distance = to_satellite.magnitude();
            let outgoing = to_satellite / distance;
            let cos_out = panel.normal.dot(&outgoing);
            if cos_out <= 0.0 {
                return None;
            }

            let radiance = SUN_INTENSITY * earth_brdf.evaluate(sun, &panel.normal, &outgoing) * cos_sun;
            let irradiance = radiance * cos_out * panel.area / distance.powi(2);
            Some((-outgoing, irradiance))
        })
        .collect()
}

/// Two unit vectors completing a right-handed basis with `pole`
fn tangent_basis(pole: &na::Vector3<f64>) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let reference = if pole.z.abs() < 0.9 {
        na::Vector3::z()
    } else {
        na::Vector3::x()
    };
    let first = reference.cross(pole).normalize();
    let second = pole.cross(&first);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_panels_cover_visible_cap() {
        let position = SatellitePosition::locate(550e3, 90.0, 0.0);
        let panels = visible_earth_panels(&position, 60);
        assert_eq!(panels.len(), 3600);

        let cap_angle = (R_EARTH / (R_EARTH + 550e3)).acos();
        let cap_area = 2.0 * PI * R_EARTH.powi(2) * (1.0 - cap_angle.cos());
        let total: f64 = panels.iter().map(|p| p.area).sum();
        assert_relative_eq!(total, cap_area, max_relative = 1e-3);

        for panel in &panels {
            assert_relative_eq!((panel.position - geocentre()).magnitude(), R_EARTH, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_density_has_no_panels() {
        let position = SatellitePosition::locate(550e3, 45.0, 0.0);
        assert!(visible_earth_panels(&position, 0).is_empty());
    }

    #[test]
    fn test_night_side_sends_nothing() {
        // Sun directly below the observer darkens the whole visible cap
        let position = SatellitePosition::locate(550e3, 90.0, 0.0);
        let sun = na::Vector3::new(0.0, 0.0, -1.0);
        let light = earthshine_irradiance(&position, &sun, 21, &Brdf::lambertian(0.3));
        assert!(light.is_empty());
    }

    #[test]
    fn test_day_side_lights_from_below() {
        let position = SatellitePosition::locate(550e3, 90.0, 0.0);
        let sun = na::Vector3::new(0.0, 0.0, 1.0);
        let light = earthshine_irradiance(&position, &sun, 21, &Brdf::lambertian(0.3));
        assert!(!light.is_empty());
        for (incident, irradiance) in &light {
            assert!(incident.z < 0.0);
            assert!(*irradiance > 0.0);
        }
    }
}
