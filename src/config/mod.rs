pub mod brightness;
pub mod satellite;
