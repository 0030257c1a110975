use crate::constants::MAX_DELAY_SAMPLES;
use crate::error::{FilterError, Result};

/// Convert a delay in seconds to a whole number of samples, truncating
///
/// # Errors
/// Returns `FilterError::InvalidCoefficients` if the delay rounds down to
/// less than one sample or exceeds [`MAX_DELAY_SAMPLES`], and
/// `FilterError::Config` for a zero sample rate.
pub fn delay_in_samples(delay_secs: f64, sample_rate: u32) -> Result<usize> {
    if sample_rate == 0 {
        return Err(FilterError::Config(
            "sample rate must be positive".to_string(),
        ));
    }
    let samples = (delay_secs * sample_rate as f64).floor();
    if !samples.is_finite() || samples < 1.0 {
        return Err(FilterError::InvalidCoefficients(format!(
            "delay of {}s at {} Hz is shorter than one sample",
            delay_secs, sample_rate
        )));
    }
    if samples > MAX_DELAY_SAMPLES as f64 {
        return Err(FilterError::InvalidCoefficients(format!(
            "delay of {}s at {} Hz exceeds the {} sample limit",
            delay_secs, sample_rate, MAX_DELAY_SAMPLES
        )));
    }
    Ok(samples as usize)
}

/// Per-sample phase increment of the modulators: pi * freq / sample_rate
pub fn half_angular_step(freq_hz: f64, sample_rate: u32) -> Result<f64> {
    if sample_rate == 0 {
        return Err(FilterError::Config(
            "sample rate must be positive".to_string(),
        ));
    }
    if !freq_hz.is_finite() {
        return Err(FilterError::Config(format!(
            "modulation frequency must be finite, got {}",
            freq_hz
        )));
    }
    Ok(std::f64::consts::PI * freq_hz / sample_rate as f64)
}
