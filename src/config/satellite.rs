use crate::models::{Brdf, SatelliteModel, Surface, SurfaceSet};
use lazy_static::lazy_static;
use nalgebra as na;

lazy_static! {
    /// Body surfaces shared by every brightness calculation. Read-only; callers
    /// obtain their own copy through [`SatelliteModel::get_surfaces`].
    pub static ref DEFAULT_SATELLITE_MODEL: SurfaceSet = ChassisModel.get_surfaces();
}

/// Satellite bus without its solar array: a single nadir-facing chassis plate.
pub struct ChassisModel;

impl ChassisModel {
    pub const CHASSIS_AREA: f64 = 3.64; // m^2
    pub const CHASSIS_KD: f64 = 0.34;
    pub const CHASSIS_KS: f64 = 0.4;
    pub const CHASSIS_SHININESS: f64 = 8.0;

    pub fn chassis_normal() -> na::Vector3<f64> {
        na::Vector3::new(0.0, 0.0, -1.0)
    }
}

impl SatelliteModel for ChassisModel {
    fn get_surfaces(&self) -> SurfaceSet {
        SurfaceSet::new(vec![Surface::new(
            Self::CHASSIS_AREA,
            Self::chassis_normal(),
            Brdf::phong(Self::CHASSIS_KD, Self::CHASSIS_KS, Self::CHASSIS_SHININESS),
        )])
    }
}
