pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)

// Photometry
pub const SUN_INTENSITY: f64 = 1361.0; // Solar irradiance at 1 AU (W/m^2)
pub const SUN_AB_MAGNITUDE: f64 = -26.74; // Apparent AB magnitude of the sun

// Solar array sizing
pub const BASE_POWER: f64 = 30.0; // Rated power of one panel (kW)
pub const BASE_PANEL_AREA: f64 = 104.96; // Footprint of one panel (m^2)

// Math
pub const PI: f64 = std::f64::consts::PI;
