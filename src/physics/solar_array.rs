use super::sizing::power_to_area;
use crate::config::satellite::DEFAULT_SATELLITE_MODEL;
use crate::models::{Brdf, SatelliteModel, Surface, SurfaceSet};
use nalgebra as na;
use tracing::trace;

// Lab-measured fit for the array material
const SOLAR_ARRAY_B: [f64; 2] = [0.534, -20.409];
const SOLAR_ARRAY_C: [f64; 6] = [-527.765, 1000., -676.579, 430.596, -175.806, 57.879];
const SOLAR_ARRAY_D: f64 = 3.0;
const SOLAR_ARRAY_L1: f64 = -3.0;

/// Reflectance of the solar array material.
pub fn get_solar_array_brdf() -> Brdf {
    Brdf::binomial(
        na::DMatrix::from_row_slice(1, SOLAR_ARRAY_B.len(), &SOLAR_ARRAY_B),
        na::DMatrix::from_row_slice(1, SOLAR_ARRAY_C.len(), &SOLAR_ARRAY_C),
        SOLAR_ARRAY_D,
        SOLAR_ARRAY_L1,
    )
}

/// The array faces along body +y, perpendicular to the body's up axis.
pub fn solar_array_normal() -> na::Vector3<f64> {
    na::Vector3::new(0.0, 1.0, 0.0)
}

/// Default satellite body plus one solar array sized for `power_kw`.
pub fn get_surfaces_with_solar_array(power_kw: f64, continuous: bool) -> SurfaceSet {
    get_surfaces_with_solar_array_from(&*DEFAULT_SATELLITE_MODEL, power_kw, continuous)
}

/// `model`'s body surfaces plus one solar array sized for `power_kw`,
/// appended last. The model itself is left untouched.
pub fn get_surfaces_with_solar_array_from<M: SatelliteModel + ?Sized>(
    model: &M,
    power_kw: f64,
    continuous: bool,
) -> SurfaceSet {
    let mut surfaces = model.get_surfaces();
    let area = power_to_area(power_kw, continuous);
    trace!(power_kw, continuous, area, "sizing solar array");

    surfaces.push(Surface::new(area, solar_array_normal(), get_solar_array_brdf()));
    surfaces
}
