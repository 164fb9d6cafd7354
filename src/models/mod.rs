pub mod brdf;
pub mod observer;
pub mod result;
pub mod samples;
pub mod surface;

pub use brdf::Brdf;
pub use observer::ObserverGeometry;
pub use result::{BrightnessResult, PowerType};
pub use samples::Samples;
pub use surface::{SatelliteModel, Surface, SurfaceSet};
