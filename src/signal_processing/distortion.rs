use crate::config::DistortionConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;

/// Hard-clipping distortion
///
/// Clamps each sample to `[-limit, limit]` and scales the result by `gain`.
/// Memoryless, so the output never depends on earlier calls.
#[derive(Debug, Clone)]
pub struct Distortion {
    limit: f64,
    gain: f64,
}

impl Distortion {
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` for a NaN or infinite
    /// limit.
    pub fn new(config: &DistortionConfig) -> Result<Self> {
        if !config.limit.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "distortion limit must be finite, got {}",
                config.limit
            )));
        }
        if config.limit < 0.0 {
            log::warn!(
                "Negative distortion limit {} given, using its magnitude",
                config.limit
            );
        }
        Ok(Self {
            limit: config.limit.abs(),
            gain: config.gain,
        })
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }
}

impl Filter for Distortion {
    fn process(&mut self, sample: f64) -> f64 {
        self.gain * sample.clamp(-self.limit, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_limit(limit: f64, gain: f64) -> Distortion {
        Distortion::new(&DistortionConfig { limit, gain }).unwrap()
    }

    #[test]
    fn test_clips_and_scales() {
        let mut dist = with_limit(0.5, 2.0);
        assert_eq!(dist.process(0.25), 0.5);
        assert_eq!(dist.process(0.9), 1.0);
        assert_eq!(dist.process(-3.0), -1.0);
        assert_eq!(dist.process(0.0), 0.0);
    }

    #[test]
    fn test_time_invariant() {
        let mut dist = Distortion::new(&DistortionConfig::default()).unwrap();
        let first = dist.process(0.01);
        for _ in 0..100 {
            dist.process(1.0);
        }
        assert_eq!(dist.process(0.01), first);
    }

    #[test]
    fn test_negative_limit_uses_magnitude() {
        let mut dist = with_limit(-0.1, 1.0);
        assert_eq!(dist.limit(), 0.1);
        assert_eq!(dist.process(5.0), 0.1);
    }

    #[test]
    fn test_defaults() {
        let dist = Distortion::new(&DistortionConfig::default()).unwrap();
        assert_eq!(dist.limit(), 0.02);
        assert_eq!(dist.gain(), 5.0);
    }

    #[test]
    fn test_non_finite_limit_rejected() {
        for limit in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Distortion::new(&DistortionConfig { limit, gain: 1.0 });
            assert!(
                matches!(result, Err(FilterError::InvalidCoefficients(_))),
                "limit {} was accepted",
                limit
            );
        }
    }

    #[test]
    fn test_nan_limit_preset_fails_at_build() {
        let preset: crate::config::EffectConfig = toml::from_str(
            r#"
            effect = "distortion"
            limit = nan
            "#,
        )
        .unwrap();
        assert!(matches!(
            preset.build(),
            Err(FilterError::InvalidCoefficients(_))
        ));
    }
}
