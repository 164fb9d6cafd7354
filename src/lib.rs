//! Apparent brightness of a satellite as a function of its solar array power
//! and the sun/observer geometry.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod physics;

pub use config::brightness::{BrightnessOptions, DEFAULT_EARTH_BRDF};
pub use config::satellite::DEFAULT_SATELLITE_MODEL;
pub use errors::BrightnessError;
pub use models::{Brdf, BrightnessResult, ObserverGeometry, PowerType, Samples, Surface, SurfaceSet};
pub use physics::brightness::{calculate_brightness, calculate_brightness_with};
pub use physics::sizing::power_to_area;
pub use physics::solar_array::{
    get_solar_array_brdf, get_surfaces_with_solar_array, get_surfaces_with_solar_array_from,
};
