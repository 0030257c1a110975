use crate::config::CrossTalkConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::{DifferenceEquation, Filter};

/// Measured same-side impulse response (16 taps)
pub const DEFAULT_IPSILATERAL: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.05853095, 0.44806808, 0.8575164,
    0.0,
];

/// Measured cross-side impulse response (16 taps)
pub const DEFAULT_CONTRALATERAL: [f64; 16] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.2419317, -0.9260218, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// Two-channel cross-talk canceller
///
/// Evaluates a 2x2 matrix of FIR filters over stereo input:
///
/// ```text
/// left_out  = H_ipsi * left + H_contra * right
/// right_out = H_contra * left + H_ipsi * right
/// ```
///
/// Each of the four paths owns its own filter and history.
#[derive(Debug, Clone)]
pub struct CrossTalkCanceller {
    left_to_left: DifferenceEquation,
    right_to_left: DifferenceEquation,
    left_to_right: DifferenceEquation,
    right_to_right: DifferenceEquation,
}

impl CrossTalkCanceller {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either impulse response
    /// is empty.
    pub fn new(config: &CrossTalkConfig) -> Result<Self> {
        let fir = |taps: &[f64], name: &str| {
            DifferenceEquation::fir(taps).map_err(|_| {
                FilterError::InvalidCoefficients(format!("{} impulse response is empty", name))
            })
        };

        log::debug!(
            "Cross-talk canceller: {} ipsilateral taps, {} contralateral taps",
            config.ipsilateral.len(),
            config.contralateral.len()
        );

        Ok(Self {
            left_to_left: fir(&config.ipsilateral, "ipsilateral")?,
            right_to_left: fir(&config.contralateral, "contralateral")?,
            left_to_right: fir(&config.contralateral, "contralateral")?,
            right_to_right: fir(&config.ipsilateral, "ipsilateral")?,
        })
    }

    /// Process one stereo frame, returning `(left, right)`
    pub fn process(&mut self, left: f64, right: f64) -> (f64, f64) {
        let left_out = self.left_to_left.process(left) + self.right_to_left.process(right);
        let right_out = self.left_to_right.process(left) + self.right_to_right.process(right);
        (left_out, right_out)
    }

    /// Process a sequence of stereo frames in order
    pub fn process_batch(&mut self, frames: &[(f64, f64)]) -> Vec<(f64, f64)> {
        frames
            .iter()
            .map(|&(left, right)| self.process(left, right))
            .collect()
    }

    /// Process interleaved L/R samples in-place
    ///
    /// A trailing unpaired sample is left untouched.
    pub fn process_interleaved(&mut self, buffer: &mut [f64]) {
        for frame in buffer.chunks_exact_mut(2) {
            let (left, right) = self.process(frame[0], frame[1]);
            frame[0] = left;
            frame[1] = right;
        }
    }
}
