use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrightnessError {
    #[error("satellite altitude has {altitudes} samples but azimuth has {azimuths}")]
    SampleLengthMismatch { altitudes: usize, azimuths: usize },
    #[error("got {heights} satellite heights for {samples} geometry samples")]
    HeightLengthMismatch { heights: usize, samples: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
