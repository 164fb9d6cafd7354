use csv::Writer;
use satbright::{calculate_brightness, BrightnessError, BrightnessOptions, ObserverGeometry};
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct SweepRow {
    #[serde(rename = "Power (kW)")]
    power_kw: f64,
    #[serde(rename = "Power Type")]
    power_type: String,
    #[serde(rename = "Array Area (m^2)")]
    area: f64,
    #[serde(rename = "Satellite Altitude (deg)")]
    sat_altitude: f64,
    #[serde(rename = "Satellite Azimuth (deg)")]
    sat_azimuth: f64,
    #[serde(rename = "Intensity (W/m^2)")]
    intensity: f64,
    #[serde(rename = "AB Magnitude")]
    ab_magnitude: f64,
}

fn main() -> Result<(), BrightnessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sat_height = 550_000.0; // meters
    let sat_altitudes = vec![90.0, 70.0, 50.0, 30.0, 15.0];
    let sat_azimuths = vec![0.0, 45.0, 90.0, 135.0, 180.0];
    let sun_altitude = -18.0; // astronomical twilight
    let sun_azimuth = 270.0;
    let powers_kw = [10.0, 30.0, 60.0, 120.0, 240.0];

    let geometry = ObserverGeometry::new(
        sat_height,
        sat_altitudes.clone(),
        sat_azimuths.clone(),
        sun_altitude,
        sun_azimuth,
    );

    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("brightness_sweep.csv"))?;
    let mut writer = Writer::from_writer(file);

    for continuous in [false, true] {
        let options = BrightnessOptions::default()
            .with_continuous(continuous)
            .with_earthshine(true);

        for &power_kw in &powers_kw {
            let result = calculate_brightness(&geometry, power_kw, &options)?;
            let brightest = result
                .ab_magnitude
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min);
            info!(
                power_kw,
                power_type = %result.power_type,
                area = result.area,
                brightest,
                "evaluated power level"
            );

            for (i, (&intensity, &ab_magnitude)) in
                result.intensity.iter().zip(&result.ab_magnitude).enumerate()
            {
                writer.serialize(SweepRow {
                    power_kw,
                    power_type: result.power_type.to_string(),
                    area: result.area,
                    sat_altitude: sat_altitudes[i],
                    sat_azimuth: sat_azimuths[i],
                    intensity,
                    ab_magnitude,
                })?;
            }
        }
    }

    writer.flush()?;
    info!("Brightness sweep has been written to output/brightness_sweep.csv");

    Ok(())
}
