use crate::config::FlangerConfig;
use crate::constants::MAX_DELAY_SAMPLES;
use crate::error::{FilterError, Result};
use crate::signal_processing::math::half_angular_step;
use crate::signal_processing::{DelayLine, Filter};

/// Flanger: the dry signal plus a copy whose delay sweeps with a cosine
///
/// The read offset is `floor(D * (1 + cos(omega * n)))` with
/// `D = max_delay * sample_rate`, so it ranges over `[0, 2D]`. The history
/// holds `floor(2D) + 1` samples, which keeps every offset in range.
#[derive(Debug, Clone)]
pub struct Flanger {
    history: DelayLine,
    omega: f64,
    /// Sweep amplitude in samples
    depth: f64,
    n: u64,
}

impl Flanger {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` for a negative or
    /// non-finite maximum delay, or a sweep longer than
    /// [`MAX_DELAY_SAMPLES`], and `FilterError::Config` for a zero sample
    /// rate.
    pub fn new(config: &FlangerConfig) -> Result<Self> {
        let omega = half_angular_step(config.freq_hz, config.sample_rate)?;
        let depth = config.max_delay_secs * config.sample_rate as f64;
        if !depth.is_finite() || depth < 0.0 {
            return Err(FilterError::InvalidCoefficients(format!(
                "flanger max delay must be non-negative, got {}s",
                config.max_delay_secs
            )));
        }

        let span = (2.0 * depth).floor();
        if span >= MAX_DELAY_SAMPLES as f64 {
            return Err(FilterError::InvalidCoefficients(format!(
                "flanger sweep of {} samples exceeds the {} sample limit",
                span, MAX_DELAY_SAMPLES
            )));
        }

        let capacity = span as usize + 1;
        log::debug!(
            "Flanger: sweep depth {:.1} samples, history {} samples",
            depth,
            capacity
        );

        Ok(Self {
            history: DelayLine::new(capacity),
            omega,
            depth,
            n: 0,
        })
    }

    /// Number of past samples retained for the sweep
    pub fn history_len(&self) -> usize {
        self.history.capacity()
    }

    fn read_offset(&self) -> usize {
        let offset = (self.depth * (1.0 + (self.omega * self.n as f64).cos())).floor() as usize;
        // cos may round a hair above 1.0; never step past the oldest sample
        offset.min(self.history.capacity() - 1)
    }
}

impl Filter for Flanger {
    fn process(&mut self, sample: f64) -> f64 {
        self.history.push(sample);
        self.n += 1;
        sample + self.history.read(self.read_offset())
    }
}
