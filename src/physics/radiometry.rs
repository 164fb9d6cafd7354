use super::earthshine::earthshine_irradiance;
use super::geometry::{horizontal_to_unit, in_earth_shadow, SatelliteFrame, SatellitePosition};
use crate::constants::SUN_INTENSITY;
use crate::errors::BrightnessError;
use crate::models::{Brdf, Surface, SurfaceSet};
use nalgebra as na;
use tracing::trace;

/// Light sources to integrate over.
#[derive(Debug, Clone)]
pub struct Illumination<'a> {
    pub include_sun: bool,
    pub include_earthshine: bool,
    pub earth_panel_density: usize,
    pub earth_brdf: &'a Brdf,
}

pub trait IntensityIntegrator {
    /// Irradiance (W/m^2) reflected toward the observer, one value per
    /// geometry sample. Heights in meters, angles in degrees.
    #[allow(clippy::too_many_arguments)]
    fn get_intensity_observer_frame(
        &self,
        surfaces: &SurfaceSet,
        sat_heights: &[f64],
        sat_altitudes: &[f64],
        sat_azimuths: &[f64],
        sun_altitude: f64,
        sun_azimuth: f64,
        illumination: &Illumination<'_>,
    ) -> Result<Vec<f64>, BrightnessError>;
}

/// Integrates direct sunlight and earthshine over flat surfaces seen from a
/// ground observer on a spherical earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverFrameIntegrator;

impl IntensityIntegrator for ObserverFrameIntegrator {
    fn get_intensity_observer_frame(
        &self,
        surfaces: &SurfaceSet,
        sat_heights: &[f64],
        sat_altitudes: &[f64],
        sat_azimuths: &[f64],
        sun_altitude: f64,
        sun_azimuth: f64,
        illumination: &Illumination<'_>,
    ) -> Result<Vec<f64>, BrightnessError> {
        if sat_altitudes.len() != sat_azimuths.len() {
            return Err(BrightnessError::SampleLengthMismatch {
                altitudes: sat_altitudes.len(),
                azimuths: sat_azimuths.len(),
            });
        }
        if sat_heights.len() != sat_altitudes.len() {
            return Err(BrightnessError::HeightLengthMismatch {
                heights: sat_heights.len(),
                samples: sat_altitudes.len(),
            });
        }

        let sun = horizontal_to_unit(sun_altitude, sun_azimuth);

        let intensity = sat_heights
            .iter()
            .zip(sat_altitudes)
            .zip(sat_azimuths)
            .map(|((&height, &altitude), &azimuth)| {
                let position = SatellitePosition::locate(height, altitude, azimuth);
                sample_intensity(surfaces, &position, &sun, illumination)
            })
            .collect();

        Ok(intensity)
    }
}

/// A satellite surface with its normal rotated into the observer frame.
pub(crate) struct OrientedSurface<'a> {
    pub normal: na::Vector3<f64>,
    pub surface: &'a Surface,
}

pub(crate) fn orient<'a>(surfaces: &'a SurfaceSet, frame: &SatelliteFrame) -> Vec<OrientedSurface<'a>> {
    surfaces
        .iter()
        .filter_map(|surface| {
            // A degenerate normal cannot face anything
            let body = surface.normal().try_normalize(1e-12)?;
            Some(OrientedSurface {
                normal: frame.to_observer(&body),
                surface,
            })
        })
        .collect()
}

/// Radiant intensity (W/sr) sent along `view` by all surfaces lit with
/// `irradiance` (W/m^2) arriving from `incident`.
pub(crate) fn reflected_intensity(
    surfaces: &[OrientedSurface<'_>],
    incident: &na::Vector3<f64>,
    view: &na::Vector3<f64>,
    irradiance: f64,
) -> f64 {
    surfaces
        .iter()
        .map(|oriented| {
            let cos_i = oriented.normal.dot(incident);
            let cos_v = oriented.normal.dot(view);
            if cos_i <= 0.0 || cos_v <= 0.0 {
                return 0.0;
            }
            let brdf = oriented.surface.brdf().evaluate(incident, &oriented.normal, view);
            irradiance * brdf * oriented.surface.area() * cos_i * cos_v
        })
        .sum()
}

fn sample_intensity(
    surfaces: &SurfaceSet,
    position: &SatellitePosition,
    sun: &na::Vector3<f64>,
    illumination: &Illumination<'_>,
) -> f64 {
    let frame = SatelliteFrame::new(&position.geocentric, sun);
    let oriented = orient(surfaces, &frame);
    let view = position.to_observer();

    let mut radiant_intensity = 0.0;

    if illumination.include_sun {
        if in_earth_shadow(&position.geocentric, sun) {
            trace!(range = position.range, "satellite in earth shadow");
        } else {
            radiant_intensity += reflected_intensity(&oriented, sun, &view, SUN_INTENSITY);
        }
    }

    if illumination.include_earthshine {
        radiant_intensity += earthshine_irradiance(
            position,
            sun,
            illumination.earth_panel_density,
            illumination.earth_brdf,
        )
        .into_iter()
        .map(|(incident, irradiance)| reflected_intensity(&oriented, &incident, &view, irradiance))
        .sum::<f64>();
    }

    radiant_intensity / position.range.powi(2)
}
