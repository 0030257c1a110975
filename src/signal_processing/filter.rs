/// Common trait for single-channel sample processors
///
/// Implemented by [`DifferenceEquation`](super::DifferenceEquation) and by
/// every effect. Effects that are not expressible as a fixed coefficient set
/// (tremolo, distortion, flanger) implement `process` directly.
///
/// Calls on one instance must follow the temporal order of the input
/// stream; feedback terms depend on earlier outputs.
pub trait Filter: Send {
    /// Process a single sample through the filter
    fn process(&mut self, sample: f64) -> f64;

    /// Process a buffer of samples in-place
    fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Process a sequence of samples, returning the outputs in order
    fn process_batch(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&s| self.process(s)).collect()
    }
}
