use crate::config::TremoloConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;
use crate::signal_processing::math::half_angular_step;

/// Amplitude modulation by a slow cosine
///
/// ```text
/// y[n] = x[n] * (1 + cos(pi * freq * n / sample_rate) / gain)
/// ```
///
/// `n` counts calls starting at 1. The modulator is a pure function of the
/// call count; there is no coefficient state.
#[derive(Debug, Clone)]
pub struct Tremolo {
    /// Phase increment per sample
    omega: f64,
    gain: f64,
    n: u64,
}

impl Tremolo {
    /// # Errors
    /// Returns `FilterError::Config` for a zero or non-finite gain or a
    /// zero sample rate.
    pub fn new(config: &TremoloConfig) -> Result<Self> {
        if config.gain == 0.0 || !config.gain.is_finite() {
            return Err(FilterError::Config(format!(
                "tremolo gain must be finite and non-zero, got {}",
                config.gain
            )));
        }
        Ok(Self {
            omega: half_angular_step(config.freq_hz, config.sample_rate)?,
            gain: config.gain,
            n: 0,
        })
    }

    /// Number of samples processed so far
    pub fn position(&self) -> u64 {
        self.n
    }
}

impl Filter for Tremolo {
    fn process(&mut self, sample: f64) -> f64 {
        self.n += 1;
        (1.0 + (self.omega * self.n as f64).cos() / self.gain) * sample
    }
}
