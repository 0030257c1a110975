use crate::config::MovingAverageConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::{DifferenceEquation, Filter};

/// Simple moving average filter for signal smoothing
///
/// Computes the arithmetic mean of the last N values in a sliding window:
/// numerator is N ones, denominator is `[N]`. Before the window fills, the
/// missing history counts as zero, so the first outputs ramp up.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    filter: DifferenceEquation,
}

impl MovingAverage {
    /// Create a new moving average filter
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` for a zero window size.
    pub fn new(config: &MovingAverageConfig) -> Result<Self> {
        let size = config.window_size;
        if size == 0 {
            return Err(FilterError::InvalidCoefficients(
                "moving average window must hold at least one sample".to_string(),
            ));
        }
        Ok(Self {
            filter: DifferenceEquation::new(&vec![1.0; size], &[size as f64])?,
        })
    }

    /// Number of samples averaged
    pub fn window_size(&self) -> usize {
        self.filter.numerator().len()
    }
}

impl Filter for MovingAverage {
    fn process(&mut self, sample: f64) -> f64 {
        self.filter.process(sample)
    }
}
