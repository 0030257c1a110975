use crate::config::LeakyIntegratorConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::{DifferenceEquation, Filter};

/// One-pole low-pass: `y[n] = (1 - lambda) x[n] + lambda y[n-1]`
///
/// Unity gain at DC for any `lambda != 1`.
#[derive(Debug, Clone)]
pub struct LeakyIntegrator {
    filter: DifferenceEquation,
}

impl LeakyIntegrator {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` for a non-finite `lambda`.
    pub fn new(config: &LeakyIntegratorConfig) -> Result<Self> {
        let lambda = config.lambda;
        if !lambda.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "leaky integrator lambda must be finite, got {}",
                lambda
            )));
        }
        if lambda.abs() >= 1.0 {
            log::warn!("Leaky integrator lambda {} is unstable", lambda);
        }
        Ok(Self {
            filter: DifferenceEquation::new(&[1.0 - lambda], &[1.0, -lambda])?,
        })
    }

    pub fn equation(&self) -> &DifferenceEquation {
        &self.filter
    }
}

impl Filter for LeakyIntegrator {
    fn process(&mut self, sample: f64) -> f64 {
        self.filter.process(sample)
    }
}
