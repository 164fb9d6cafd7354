use serde::{Deserialize, Serialize};
use std::fmt;

/// Duty-cycle policy used to size the solar array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerType {
    Instantaneous,
    Continuous,
}

impl PowerType {
    pub fn from_continuous(continuous: bool) -> Self {
        if continuous {
            PowerType::Continuous
        } else {
            PowerType::Instantaneous
        }
    }

    pub fn is_continuous(self) -> bool {
        self == PowerType::Continuous
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PowerType::Instantaneous => "instantaneous",
            PowerType::Continuous => "continuous",
        }
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightnessResult {
    /// Irradiance at the observer (W/m^2), one per geometry sample
    pub intensity: Vec<f64>,
    pub ab_magnitude: Vec<f64>,
    /// Solar array area used (m^2)
    pub area: f64,
    pub power_type: PowerType,
}
