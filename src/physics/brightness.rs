use super::radiometry::{Illumination, IntensityIntegrator, ObserverFrameIntegrator};
use super::sizing::power_to_area;
use super::solar_array::get_surfaces_with_solar_array_from;
use crate::config::brightness::BrightnessOptions;
use crate::config::satellite::DEFAULT_SATELLITE_MODEL;
use crate::errors::BrightnessError;
use crate::models::{BrightnessResult, ObserverGeometry, PowerType, SatelliteModel};
use crate::numerics::conversions::intensity_to_ab_mag;
use tracing::debug;

/// Brightness of the default satellite carrying a solar array sized for
/// `power_kw`, seen from the ground.
///
/// Returns one intensity and one AB magnitude per altitude/azimuth sample.
/// The altitude and azimuth samples must have equal length; nothing else is
/// validated, so non-physical power or angles yield degenerate numbers
/// rather than an error.
pub fn calculate_brightness(
    geometry: &ObserverGeometry,
    power_kw: f64,
    options: &BrightnessOptions,
) -> Result<BrightnessResult, BrightnessError> {
    calculate_brightness_with(
        &ObserverFrameIntegrator,
        &*DEFAULT_SATELLITE_MODEL,
        geometry,
        power_kw,
        options,
    )
}

/// [`calculate_brightness`] with an explicit integrator and body model.
pub fn calculate_brightness_with<I, M>(
    integrator: &I,
    model: &M,
    geometry: &ObserverGeometry,
    power_kw: f64,
    options: &BrightnessOptions,
) -> Result<BrightnessResult, BrightnessError>
where
    I: IntensityIntegrator + ?Sized,
    M: SatelliteModel + ?Sized,
{
    let surfaces = get_surfaces_with_solar_array_from(model, power_kw, options.continuous);

    let illumination = Illumination {
        include_sun: options.include_sun,
        include_earthshine: options.include_earthshine,
        earth_panel_density: options.earth_panel_density,
        earth_brdf: options.resolved_earth_brdf(),
    };

    let heights = geometry.broadcast_heights();
    debug!(
        samples = geometry.sample_count(),
        surfaces = surfaces.len(),
        power_kw,
        continuous = options.continuous,
        include_sun = options.include_sun,
        include_earthshine = options.include_earthshine,
        "calculating brightness"
    );

    let intensity = integrator.get_intensity_observer_frame(
        &surfaces,
        heights.as_slice(),
        geometry.sat_altitude.as_slice(),
        geometry.sat_azimuth.as_slice(),
        geometry.sun_altitude,
        geometry.sun_azimuth,
        &illumination,
    )?;

    let ab_magnitude = intensity_to_ab_mag(&intensity);

    Ok(BrightnessResult {
        intensity,
        ab_magnitude,
        area: power_to_area(power_kw, options.continuous),
        power_type: PowerType::from_continuous(options.continuous),
    })
}
