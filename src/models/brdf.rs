use crate::constants::PI;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Reflectance models for satellite and earth surfaces.
///
/// Every variant is evaluated on unit vectors expressed in one common frame:
/// `incident` points from the surface toward the light source, `normal` is the
/// outward surface normal and `view` points from the surface toward the
/// observer. Light arriving from behind the surface, or leaving toward an
/// observer behind it, is never reflected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Brdf {
    /// Lab-fit model: an exponential specular lobe in the half-angle with
    /// coefficients `b`, plus a diffuse polynomial with coefficients `c`
    /// scaled by `10^l1` and evaluated in `cos(theta_i)^(1/d)`.
    /// Row `j` of either matrix multiplies `theta_i^j`.
    Binomial {
        b: na::DMatrix<f64>,
        c: na::DMatrix<f64>,
        d: f64,
        l1: f64,
    },
    /// Energy-normalized Phong: diffuse `kd`, specular `ks`, shininess `n`.
    Phong { kd: f64, ks: f64, n: f64 },
    Lambertian { kd: f64 },
}

impl Brdf {
    pub fn binomial(b: na::DMatrix<f64>, c: na::DMatrix<f64>, d: f64, l1: f64) -> Self {
        Brdf::Binomial { b, c, d, l1 }
    }

    pub fn phong(kd: f64, ks: f64, n: f64) -> Self {
        Brdf::Phong { kd, ks, n }
    }

    pub fn lambertian(kd: f64) -> Self {
        Brdf::Lambertian { kd }
    }

    /// Reflectance (1/sr) for light arriving along `incident` and leaving along `view`.
    pub fn evaluate(
        &self,
        incident: &na::Vector3<f64>,
        normal: &na::Vector3<f64>,
        view: &na::Vector3<f64>,
    ) -> f64 {
        let cos_i = incident.dot(normal);
        let cos_v = view.dot(normal);
        if cos_i <= 0.0 || cos_v <= 0.0 {
            return 0.0;
        }

        match self {
            Brdf::Lambertian { kd } => kd / PI,
            Brdf::Phong { kd, ks, n } => {
                let mirror = 2.0 * cos_i * normal - incident;
                let alignment = mirror.dot(view).max(0.0);
                kd / PI + ks * (n + 2.0) / (2.0 * PI) * alignment.powf(*n)
            }
            Brdf::Binomial { b, c, d, l1 } => {
                let theta_i = cos_i.min(1.0).acos();
                // Both directions lie in the front hemisphere so the sum is never zero
                let half = (incident + view).normalize();
                let theta_h = half.dot(normal).clamp(-1.0, 1.0).acos();

                let lobe = fit_polynomial(b, theta_i, theta_h * theta_h).exp();
                let diffuse = 10f64.powf(*l1) * fit_polynomial(c, theta_i, cos_i.powf(1.0 / d));
                (lobe + diffuse).max(0.0)
            }
        }
    }

    /// Angle form of [`Brdf::evaluate`], all angles in radians.
    ///
    /// `theta_i` and `theta_o` are measured from the surface normal, `phi` is the
    /// azimuth of the observer relative to the light source. `phi = PI` puts the
    /// observer in the mirror plane on the far side of the normal.
    pub fn evaluate_angles(&self, theta_i: f64, theta_o: f64, phi: f64) -> f64 {
        let normal = na::Vector3::z();
        let incident = na::Vector3::new(theta_i.sin(), 0.0, theta_i.cos());
        let view = na::Vector3::new(
            theta_o.sin() * phi.cos(),
            theta_o.sin() * phi.sin(),
            theta_o.cos(),
        );
        self.evaluate(&incident, &normal, &view)
    }
}

/// `sum_j sum_k m[j, k] * row_var^j * col_var^k`
fn fit_polynomial(coefficients: &na::DMatrix<f64>, row_var: f64, col_var: f64) -> f64 {
    coefficients
        .row_iter()
        .enumerate()
        .map(|(j, row)| {
            let row_weight = row_var.powi(j as i32);
            row.iter()
                .enumerate()
                .map(|(k, coef)| coef * row_weight * col_var.powi(k as i32))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    fn lab_binomial() -> Brdf {
        Brdf::binomial(
            na::DMatrix::from_row_slice(1, 2, &[0.534, -20.409]),
            na::DMatrix::from_row_slice(
                1,
                6,
                &[-527.765, 1000., -676.579, 430.596, -175.806, 57.879],
            ),
            3.0,
            -3.0,
        )
    }

    #[test_case(0.0, 0.0, 0.0; "normal incidence")]
    #[test_case(1.2, 0.3, 2.0; "grazing light")]
    #[test_case(0.4, 1.1, PI; "mirror plane")]
    fn test_lambertian_is_constant(theta_i: f64, theta_o: f64, phi: f64) {
        let brdf = Brdf::lambertian(0.5);
        assert_relative_eq!(brdf.evaluate_angles(theta_i, theta_o, phi), 0.5 / PI);
    }

    #[test]
    fn test_back_facing_reflects_nothing() {
        let normal = na::Vector3::z();
        let front = na::Vector3::new(0.0, 0.6, 0.8);
        let behind = na::Vector3::new(0.0, 0.6, -0.8);
        for brdf in [Brdf::lambertian(1.0), Brdf::phong(0.2, 0.2, 300.0), lab_binomial()] {
            assert_eq!(brdf.evaluate(&behind, &normal, &front), 0.0);
            assert_eq!(brdf.evaluate(&front, &normal, &behind), 0.0);
        }
    }

    #[test]
    fn test_phong_peaks_in_mirror_direction() {
        let brdf = Brdf::phong(0.2, 0.2, 300.0);
        let theta = 0.5;
        let mirror = brdf.evaluate_angles(theta, theta, PI);
        let expected = 0.2 / PI + 0.2 * 302.0 / (2.0 * PI);
        assert_relative_eq!(mirror, expected, epsilon = 1e-9);

        // A sharp lobe falls back to the diffuse floor away from the mirror direction
        let off_mirror = brdf.evaluate_angles(theta, theta + 0.4, PI);
        assert_abs_diff_eq!(off_mirror, 0.2 / PI, epsilon = 1e-3);
    }

    #[test]
    fn test_binomial_lobe_at_specular() {
        let brdf = lab_binomial();
        let specular = brdf.evaluate_angles(0.3, 0.3, PI);
        let scattered = brdf.evaluate_angles(0.3, 0.9, 0.0);
        assert!(specular > scattered);

        // At the specular peak the half-angle vanishes, leaving exp(b00) plus diffuse
        let w = 0.3f64.cos().powf(1.0 / 3.0);
        let diffuse: f64 = [-527.765, 1000., -676.579, 430.596, -175.806, 57.879]
            .iter()
            .enumerate()
            .map(|(k, c)| c * w.powi(k as i32))
            .sum::<f64>()
            * 1e-3;
        assert_relative_eq!(specular, 0.534f64.exp() + diffuse, epsilon = 1e-9);
    }

    #[test]
    fn test_binomial_never_negative() {
        let brdf = lab_binomial();
        for i in 0..20 {
            for o in 0..20 {
                let value = brdf.evaluate_angles(i as f64 * 0.07, o as f64 * 0.07, 1.0);
                assert!(value >= 0.0);
            }
        }
    }
}
