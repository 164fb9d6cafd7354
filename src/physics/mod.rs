pub mod brightness;
pub mod earthshine;
pub mod geometry;
pub mod radiometry;
pub mod sizing;
pub mod solar_array;
