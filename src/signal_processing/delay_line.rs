use crate::error::{FilterError, Result};

/// Fixed-capacity ring buffer addressed by "samples ago"
///
/// Index 0 is the most recently pushed value, index `k` the value pushed
/// `k` insertions earlier. Pushing moves a write cursor instead of shifting
/// stored data, so both `push` and `read` are O(1). Once full, each push
/// overwrites the oldest value.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
    /// Slot holding the most recent value
    head: usize,
}

impl DelayLine {
    /// Create a delay line with `capacity` slots, all initialised to 0.0
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity],
            head: 0,
        }
    }

    /// Number of past values retained
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Insert `value` as the new most recent sample
    pub fn push(&mut self, value: f64) {
        let n = self.buffer.len();
        if n == 0 {
            return;
        }
        self.head += 1;
        if self.head == n {
            self.head = 0;
        }
        self.buffer[self.head] = value;
    }

    /// Value pushed `index` insertions ago (0 = most recent)
    ///
    /// # Panics
    /// Panics if `index >= capacity()`. Callers size their lines so this
    /// cannot happen; use [`DelayLine::try_read`] for untrusted indices.
    pub fn read(&self, index: usize) -> f64 {
        let n = self.buffer.len();
        assert!(
            index < n,
            "delay line index {} out of range for capacity {}",
            index,
            n
        );
        let slot = if index <= self.head {
            self.head - index
        } else {
            self.head + n - index
        };
        self.buffer[slot]
    }

    /// Checked variant of [`DelayLine::read`]
    pub fn try_read(&self, index: usize) -> Result<f64> {
        if index >= self.buffer.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                capacity: self.buffer.len(),
            });
        }
        Ok(self.read(index))
    }

    /// Most-recent-first dot product: `sum(read(i) * coeffs[i])`
    ///
    /// `coeffs` must have exactly `capacity()` entries.
    pub fn dot(&self, coeffs: &[f64]) -> f64 {
        let n = self.buffer.len();
        debug_assert_eq!(coeffs.len(), n);
        if n == 0 {
            return 0.0;
        }

        // Walk the ring in two contiguous reverse ranges to keep modulo
        // arithmetic out of the inner loop.
        let mut sum = 0.0f64;
        let mut coeff_i = 0usize;
        for slot in (0..=self.head).rev() {
            sum += coeffs[coeff_i] * self.buffer[slot];
            coeff_i += 1;
        }
        for slot in ((self.head + 1)..n).rev() {
            sum += coeffs[coeff_i] * self.buffer[slot];
            coeff_i += 1;
        }
        debug_assert_eq!(coeff_i, n);
        sum
    }
}
