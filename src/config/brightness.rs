use crate::models::Brdf;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EARTH_PANEL_DENSITY: usize = 151;

lazy_static! {
    /// Earth reflectance used for earthshine when none is configured
    pub static ref DEFAULT_EARTH_BRDF: Brdf = Brdf::phong(0.2, 0.2, 300.0);
}

/// Optional parameters of a brightness calculation.
///
/// | field                 | default |
/// |-----------------------|---------|
/// | `continuous`          | `false` |
/// | `include_sun`         | `true`  |
/// | `include_earthshine`  | `false` |
/// | `earth_panel_density` | `151`   |
/// | `earth_brdf`          | `None`, meaning [`DEFAULT_EARTH_BRDF`] |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessOptions {
    pub continuous: bool,
    pub include_sun: bool,
    pub include_earthshine: bool,
    pub earth_panel_density: usize,
    pub earth_brdf: Option<Brdf>,
}

impl Default for BrightnessOptions {
    fn default() -> Self {
        BrightnessOptions {
            continuous: false,
            include_sun: true,
            include_earthshine: false,
            earth_panel_density: DEFAULT_EARTH_PANEL_DENSITY,
            earth_brdf: None,
        }
    }
}

impl BrightnessOptions {
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn with_sun(mut self, include_sun: bool) -> Self {
        self.include_sun = include_sun;
        self
    }

    pub fn with_earthshine(mut self, include_earthshine: bool) -> Self {
        self.include_earthshine = include_earthshine;
        self
    }

    pub fn with_earth_panel_density(mut self, density: usize) -> Self {
        self.earth_panel_density = density;
        self
    }

    pub fn with_earth_brdf(mut self, brdf: Brdf) -> Self {
        self.earth_brdf = Some(brdf);
        self
    }

    /// The configured earth reflectance, or the process-wide default
    pub fn resolved_earth_brdf(&self) -> &Brdf {
        self.earth_brdf.as_ref().unwrap_or(&*DEFAULT_EARTH_BRDF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BrightnessOptions::default();
        assert!(!options.continuous);
        assert!(options.include_sun);
        assert!(!options.include_earthshine);
        assert_eq!(options.earth_panel_density, 151);
        assert_eq!(options.resolved_earth_brdf(), &Brdf::phong(0.2, 0.2, 300.0));
    }

    #[test]
    fn test_explicit_earth_brdf_wins() {
        let options = BrightnessOptions::default().with_earth_brdf(Brdf::lambertian(0.3));
        assert_eq!(options.resolved_earth_brdf(), &Brdf::lambertian(0.3));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let options: BrightnessOptions =
            serde_json::from_str(r#"{"continuous": true, "include_earthshine": true}"#).unwrap();
        assert_eq!(
            options,
            BrightnessOptions::default()
                .with_continuous(true)
                .with_earthshine(true)
        );
    }
}
