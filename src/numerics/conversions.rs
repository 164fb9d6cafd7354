use crate::constants::{SUN_AB_MAGNITUDE, SUN_INTENSITY};

/// AB magnitude of an irradiance (W/m^2), referenced to the sun.
/// Zero irradiance maps to `+inf`.
pub fn ab_magnitude(intensity: f64) -> f64 {
    SUN_AB_MAGNITUDE - 2.5 * (intensity / SUN_INTENSITY).log10()
}

/// Irradiance (W/m^2) of an AB magnitude. Inverse of [`ab_magnitude`].
pub fn ab_magnitude_to_intensity(magnitude: f64) -> f64 {
    SUN_INTENSITY * 10f64.powf((SUN_AB_MAGNITUDE - magnitude) / 2.5)
}

pub fn intensity_to_ab_mag(intensity: &[f64]) -> Vec<f64> {
    intensity.iter().copied().map(ab_magnitude).collect()
}

pub fn ab_mag_to_intensity(magnitude: &[f64]) -> Vec<f64> {
    magnitude.iter().copied().map(ab_magnitude_to_intensity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(SUN_INTENSITY, SUN_AB_MAGNITUDE; "sun")]
    #[test_case(SUN_INTENSITY / 100.0, SUN_AB_MAGNITUDE + 5.0; "hundred times fainter")]
    #[test_case(SUN_INTENSITY * 1e-12, SUN_AB_MAGNITUDE + 30.0; "satellite scale")]
    fn test_ab_magnitude(intensity: f64, expected: f64) {
        assert_relative_eq!(ab_magnitude(intensity), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_intensity_is_infinitely_faint() {
        assert_eq!(ab_magnitude(0.0), f64::INFINITY);
    }

    #[test]
    fn test_brighter_is_smaller_magnitude() {
        let magnitudes = intensity_to_ab_mag(&[1e-12, 1e-10, 1e-8]);
        assert_eq!(magnitudes.len(), 3);
        assert!(magnitudes.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_magnitude_inverse() {
        for magnitude in [2.0, 5.5, 7.0] {
            assert_relative_eq!(
                ab_magnitude(ab_magnitude_to_intensity(magnitude)),
                magnitude,
                epsilon = 1e-12
            );
        }
    }
}
