use crate::error::{FilterError, Result};
use crate::signal_processing::{DelayLine, Filter};

/// Recursive state for filters with a feedback term
#[derive(Debug, Clone)]
struct Feedback {
    /// Normalized denominator without its leading (unit) coefficient
    a_tail: Vec<f64>,
    history: DelayLine,
}

/// Linear time-invariant filter evaluating a constant-coefficient
/// difference equation
///
/// ```text
/// y[n] = sum(b[i] * x[n-i]) - sum(a[j] * y[n-j]),  j >= 1
/// ```
///
/// Both coefficient vectors are divided by the original `a[0]` once at
/// construction, so the working denominator is monic. The filter owns
/// private copies of its coefficients; caller slices are never modified.
///
/// # Example
/// ```
/// use ccde_filters::signal_processing::{DifferenceEquation, Filter};
///
/// let mut avg = DifferenceEquation::new(&[1.0, 1.0, 1.0], &[3.0]).unwrap();
/// let out = avg.process_batch(&[3.0, 3.0, 3.0]);
/// assert!((out[2] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DifferenceEquation {
    b: Vec<f64>,
    inputs: DelayLine,
    feedback: Option<Feedback>,
}

impl DifferenceEquation {
    /// Create a filter from numerator `b` and denominator `a`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either vector is empty
    /// or `a[0]` is zero or not finite.
    pub fn new(b: &[f64], a: &[f64]) -> Result<Self> {
        if b.is_empty() {
            return Err(FilterError::InvalidCoefficients(
                "numerator must have at least one coefficient".to_string(),
            ));
        }
        let Some(&a0) = a.first() else {
            return Err(FilterError::InvalidCoefficients(
                "denominator must have at least one coefficient".to_string(),
            ));
        };
        if a0 == 0.0 || !a0.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "leading denominator coefficient must be finite and non-zero, got {}",
                a0
            )));
        }

        let b: Vec<f64> = b.iter().map(|&c| c / a0).collect();
        let feedback = (a.len() > 1).then(|| {
            let a_tail: Vec<f64> = a[1..].iter().map(|&c| c / a0).collect();
            Feedback {
                history: DelayLine::new(a_tail.len()),
                a_tail,
            }
        });

        log::debug!(
            "Configured difference equation: {} feed-forward taps, {} feedback taps",
            b.len(),
            feedback.as_ref().map_or(0, |f| f.a_tail.len())
        );

        Ok(Self::from_parts(b, feedback))
    }

    /// Create a purely feed-forward (FIR) filter from its impulse response
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if `taps` is empty.
    pub fn fir(taps: &[f64]) -> Result<Self> {
        Self::new(taps, &[1.0])
    }

    fn from_parts(b: Vec<f64>, feedback: Option<Feedback>) -> Self {
        Self {
            inputs: DelayLine::new(b.len()),
            b,
            feedback,
        }
    }

    /// Normalized numerator coefficients
    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    /// Normalized denominator without its leading 1.0, or `None` when the
    /// filter has no feedback term
    pub fn feedback_coefficients(&self) -> Option<&[f64]> {
        self.feedback.as_ref().map(|f| f.a_tail.as_slice())
    }

    /// True when the denominator had a single coefficient
    pub fn is_fir(&self) -> bool {
        self.feedback.is_none()
    }
}

impl Default for DifferenceEquation {
    /// Identity pass-through: b = [1.0], a = [1.0]
    fn default() -> Self {
        Self::from_parts(vec![1.0], None)
    }
}

impl Filter for DifferenceEquation {
    fn process(&mut self, sample: f64) -> f64 {
        self.inputs.push(sample);
        let feedforward = self.inputs.dot(&self.b);

        match self.feedback.as_mut() {
            None => feedforward,
            Some(fb) => {
                let output = feedforward - fb.history.dot(&fb.a_tail);
                fb.history.push(output);
                output
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a - e).abs() < 1e-9,
                "sample {}: expected {}, got {}",
                i,
                e,
                a
            );
        }
    }

    #[test]
    fn test_default_is_identity() {
        let mut filter = DifferenceEquation::default();
        let input = [0.5, -1.0, 3.25, 0.0, 7.0];
        assert_close(&filter.process_batch(&input), &input);
        assert!(filter.is_fir());
    }

    #[test]
    fn test_normalizes_by_leading_denominator() {
        let filter = DifferenceEquation::new(&[2.0, 2.0], &[4.0, 1.0, -2.0]).unwrap();
        assert_eq!(filter.numerator(), &[0.5, 0.5]);
        assert_eq!(filter.feedback_coefficients(), Some(&[0.25, -0.5][..]));
        assert!(!filter.is_fir());
    }

    #[test]
    fn test_fir_average() {
        let mut filter = DifferenceEquation::new(&[2.0, 2.0], &[4.0]).unwrap();
        assert_close(
            &filter.process_batch(&[2.0, 3.0, 4.0, 6.0]),
            &[1.0, 2.5, 3.5, 5.0],
        );
    }

    #[test]
    fn test_first_order_recursion() {
        // y[n] = x[n] + 0.5 y[n-1]
        let mut filter = DifferenceEquation::new(&[1.0], &[1.0, -0.5]).unwrap();
        assert_close(
            &filter.process_batch(&[1.0, 0.0, 0.0, 0.0]),
            &[1.0, 0.5, 0.25, 0.125],
        );
    }

    #[test]
    fn test_scale_invariance() {
        let b = [0.3, -0.2, 0.1];
        let a = [1.0, -0.4, 0.2];
        let k = -3.5;
        let kb: Vec<f64> = b.iter().map(|c| c * k).collect();
        let ka: Vec<f64> = a.iter().map(|c| c * k).collect();

        let input: Vec<f64> = (0..50).map(|i| ((i as f64) * 0.7).sin()).collect();
        let mut plain = DifferenceEquation::new(&b, &a).unwrap();
        let mut scaled = DifferenceEquation::new(&kb, &ka).unwrap();
        assert_close(&scaled.process_batch(&input), &plain.process_batch(&input));
    }

    #[test]
    fn test_does_not_mutate_caller_coefficients() {
        let b = vec![2.0, 4.0];
        let a = vec![2.0, 1.0];
        let _filter = DifferenceEquation::new(&b, &a).unwrap();
        let _again = DifferenceEquation::new(&b, &a).unwrap();
        assert_eq!(b, vec![2.0, 4.0]);
        assert_eq!(a, vec![2.0, 1.0]);
    }

    #[test]
    fn test_rejects_zero_leading_denominator() {
        let err = DifferenceEquation::new(&[1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn test_rejects_empty_vectors() {
        assert!(DifferenceEquation::new(&[1.0], &[]).is_err());
        assert!(DifferenceEquation::new(&[], &[1.0]).is_err());
        assert!(DifferenceEquation::fir(&[]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_leading_denominator() {
        assert!(DifferenceEquation::new(&[1.0], &[f64::NAN]).is_err());
        assert!(DifferenceEquation::new(&[1.0], &[f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_process_buffer_in_place() {
        let mut filter = DifferenceEquation::new(&[1.0, 1.0, 1.0], &[3.0]).unwrap();
        let mut buffer = [3.0, 3.0, 3.0, 3.0];
        filter.process_buffer(&mut buffer);
        assert_close(&buffer, &[1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_state_carries_across_batches() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut whole = DifferenceEquation::new(&[1.0, 0.5], &[1.0, -0.3]).unwrap();
        let expected = whole.process_batch(&input);

        let mut split = DifferenceEquation::new(&[1.0, 0.5], &[1.0, -0.3]).unwrap();
        let mut out = split.process_batch(&input[..2]);
        out.extend(split.process_batch(&input[2..]));
        assert_close(&out, &expected);
    }

    #[test]
    fn test_empty_batch() {
        let mut filter = DifferenceEquation::default();
        assert!(filter.process_batch(&[]).is_empty());
    }
}
