use crate::config::ReverbConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::math::delay_in_samples;
use crate::signal_processing::{DifferenceEquation, Filter};

/// All-pass reverberator
///
/// Numerator `[-alpha, 0 x N, 1]`, denominator `[1, 0 x N, -alpha]`.
/// The magnitude response is flat; only the phase (the echo density)
/// changes, so the effect colours the sound without altering its spectrum.
#[derive(Debug, Clone)]
pub struct Reverb {
    filter: DifferenceEquation,
    delay_samples: usize,
}

impl Reverb {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if the delay is shorter
    /// than one sample or longer than `MAX_DELAY_SAMPLES` or `alpha` is not finite.
    pub fn new(config: &ReverbConfig) -> Result<Self> {
        let n = delay_in_samples(config.delay_secs, config.sample_rate)?;
        if !config.alpha.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "reverb alpha must be finite, got {}",
                config.alpha
            )));
        }
        if config.alpha.abs() >= 1.0 {
            log::warn!(
                "Reverb alpha {} is outside (-1, 1); the filter will not decay",
                config.alpha
            );
        }

        let mut b = vec![0.0; n + 2];
        let mut a = vec![0.0; n + 2];
        b[0] = -config.alpha;
        b[n + 1] = 1.0;
        a[0] = 1.0;
        a[n + 1] = -config.alpha;
        let filter = DifferenceEquation::new(&b, &a)?;

        log::debug!("Reverb: loop delay {} samples", n + 1);

        Ok(Self {
            filter,
            delay_samples: n,
        })
    }

    /// Derived delay `N` in samples
    pub fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    pub fn equation(&self) -> &DifferenceEquation {
        &self.filter
    }
}

impl Filter for Reverb {
    fn process(&mut self, sample: f64) -> f64 {
        self.filter.process(sample)
    }
}
