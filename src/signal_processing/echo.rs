use crate::config::{NaturalEchoConfig, SimpleEchoConfig};
use crate::error::{FilterError, Result};
use crate::signal_processing::math::delay_in_samples;
use crate::signal_processing::{DifferenceEquation, Filter};

/// Feed-forward echo with two repeats
///
/// Numerator `[a, 0 x N, b, 0 x N, c]`, denominator `[a + b + c]`, where
/// `N` is the configured delay in samples. The output is the weighted
/// average of the dry signal and two copies spaced `N + 1` samples apart.
#[derive(Debug, Clone)]
pub struct SimpleEcho {
    filter: DifferenceEquation,
    delay_samples: usize,
}

impl SimpleEcho {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if the delay is shorter
    /// than one sample or longer than `MAX_DELAY_SAMPLES` or the weights sum to zero.
    pub fn new(config: &SimpleEchoConfig) -> Result<Self> {
        let n = delay_in_samples(config.delay_secs, config.sample_rate)?;

        let mut b = vec![0.0; 2 * n + 3];
        b[0] = config.a;
        b[n + 1] = config.b;
        b[2 * n + 2] = config.c;
        let filter = DifferenceEquation::new(&b, &[config.a + config.b + config.c])?;

        log::debug!("Simple echo: {} samples between taps", n + 1);

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

impl Filter for SimpleEcho {
    fn process(&mut self, sample: f64) -> f64 {
        self.filter.process(sample)
    }
}

/// Recursive echo whose repeats pass through a one-pole low-pass
///
/// Numerator `[1, -lambda]`, denominator
/// `[1, -lambda, 0 x (N - 1), -alpha * (1 - lambda)]`, so each repeat is
/// darker than the one before, as in a real room.
///
/// The feedback tap sits at lag `N + 1`, the same loop length as
/// [`Reverb`](super::Reverb). Some older formulations pad one more zero and
/// place it at `N + 2`.
#[derive(Debug, Clone)]
pub struct NaturalEcho {
    filter: DifferenceEquation,
    delay_samples: usize,
}

impl NaturalEcho {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if the delay is shorter
    /// than one sample or longer than `MAX_DELAY_SAMPLES`.
    pub fn new(config: &NaturalEchoConfig) -> Result<Self> {
        let n = delay_in_samples(config.delay_secs, config.sample_rate)?;
        if !config.lambda.is_finite() || !config.alpha.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "natural echo needs finite lambda and alpha, got {} and {}",
                config.lambda, config.alpha
            )));
        }

        let b = [1.0, -config.lambda];
        let mut a = vec![0.0; n + 2];
        a[0] = 1.0;
        a[1] = -config.lambda;
        a[n + 1] = -config.alpha * (1.0 - config.lambda);
        let filter = DifferenceEquation::new(&b, &a)?;

        log::debug!("Natural echo: feedback delay {} samples", n + 1);

        Ok(Self {
            filter,
            delay_samples: n,
        })
    }

    pub fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    pub fn equation(&self) -> &DifferenceEquation {
        &self.filter
    }
}

impl Filter for NaturalEcho {
    fn process(&mut self, sample: f64) -> f64 {
        self.filter.process(sample)
    }
}
