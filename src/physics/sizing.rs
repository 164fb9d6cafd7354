use crate::constants::{BASE_PANEL_AREA, BASE_POWER};

/// Solar array area (m^2) needed to supply `power_kw`.
///
/// Panels are rated at [`BASE_POWER`] kW over [`BASE_PANEL_AREA`] m^2.
/// Continuous output doubles the area. Inputs are not validated: zero power
/// gives zero area and negative power gives negative area.
pub fn power_to_area(power_kw: f64, continuous: bool) -> f64 {
    let num_panels = power_kw / BASE_POWER;
    let area = num_panels * BASE_PANEL_AREA;

    if continuous {
        area * 2.0
    } else {
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(30.0, false => 104.96; "one panel")]
    #[test_case(30.0, true => 209.92; "one panel continuous")]
    #[test_case(0.0, false => 0.0; "no power")]
    #[test_case(0.0, true => 0.0; "no power continuous")]
    #[test_case(-30.0, false => -104.96; "negative power is not clamped")]
    fn test_power_to_area(power_kw: f64, continuous: bool) -> f64 {
        power_to_area(power_kw, continuous)
    }

    #[test_case(1.0)]
    #[test_case(12.5)]
    #[test_case(45.0)]
    #[test_case(1000.0)]
    fn test_continuous_doubles_area(power_kw: f64) {
        assert_relative_eq!(
            power_to_area(power_kw, true),
            2.0 * power_to_area(power_kw, false)
        );
        assert_relative_eq!(
            power_to_area(power_kw, false),
            power_kw / 30.0 * 104.96,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_area_is_monotonic_in_power() {
        let areas: Vec<f64> = (0..50).map(|p| power_to_area(p as f64 * 3.7, false)).collect();
        assert!(areas.windows(2).all(|w| w[1] >= w[0]));
    }
}
