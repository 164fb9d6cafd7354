use serde::{Deserialize, Serialize};

/// Angle samples in degrees.
///
/// Accepts a single value or any sequence; a scalar becomes a length-1
/// sequence. Values are taken as given, no range checks are applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Samples(Vec<f64>);

impl Samples {
    /// `value` repeated `len` times
    pub fn broadcast(value: f64, len: usize) -> Self {
        Samples(vec![value; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<f64> for Samples {
    fn from(value: f64) -> Self {
        Samples(vec![value])
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Samples(values)
    }
}

impl From<&[f64]> for Samples {
    fn from(values: &[f64]) -> Self {
        Samples(values.to_vec())
    }
}

impl From<&Vec<f64>> for Samples {
    fn from(values: &Vec<f64>) -> Self {
        Samples(values.clone())
    }
}

impl<const N: usize> From<[f64; N]> for Samples {
    fn from(values: [f64; N]) -> Self {
        Samples(values.to_vec())
    }
}
