//! Parameter sets for every effect.
//!
//! Each struct carries the conventional defaults, so callers override only
//! what they need:
//!
//! ```
//! use ccde_filters::config::ReverbConfig;
//!
//! let config = ReverbConfig {
//!     alpha: 0.5,
//!     ..Default::default()
//! };
//! assert_eq!(config.sample_rate, 44_100);
//! ```
//!
//! All structs deserialize with missing fields falling back to defaults,
//! so [`EffectConfig`] presets can be partial:
//!
//! ```
//! use ccde_filters::config::EffectConfig;
//!
//! let preset: EffectConfig = toml::from_str(r#"
//!     effect = "moving_average"
//!     window_size = 4
//! "#).unwrap();
//! assert!(preset.build().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALPHA, DEFAULT_DELAY_SECS, DEFAULT_LAMBDA, DEFAULT_SAMPLE_RATE};
use crate::error::Result;
use crate::signal_processing::{
    DifferenceEquation, Distortion, Filter, Flanger, LeakyIntegrator, MovingAverage, NaturalEcho,
    Reverb, SimpleEcho, Tremolo,
};

/// Raw transfer-function coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientConfig {
    /// Numerator (feed-forward) coefficients, most recent input first
    pub numerator: Vec<f64>,
    /// Denominator (feedback) coefficients, `a[0]` first
    pub denominator: Vec<f64>,
}

impl Default for CoefficientConfig {
    fn default() -> Self {
        Self {
            numerator: vec![1.0],
            denominator: vec![1.0],
        }
    }
}

/// Hard clipper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistortionConfig {
    /// Clipping threshold (absolute value is used)
    pub limit: f64,
    /// Gain applied after clipping
    pub gain: f64,
}

impl Default for DistortionConfig {
    fn default() -> Self {
        Self {
            limit: 0.02,
            gain: 5.0,
        }
    }
}

/// Three-tap echo: `a*x[n] + b*x[n-N-1] + c*x[n-2N-2]`, normalized by `a+b+c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEchoConfig {
    /// Weight of the direct signal
    pub a: f64,
    /// Weight of the first echo
    pub b: f64,
    /// Weight of the second echo
    pub c: f64,
    /// Spacing between taps in seconds
    pub delay_secs: f64,
    pub sample_rate: u32,
}

impl Default for SimpleEchoConfig {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.75,
            c: 0.5,
            delay_secs: DEFAULT_DELAY_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Recursive echo with a low-pass loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalEchoConfig {
    /// Pole of the loop low-pass
    pub lambda: f64,
    /// Echo decay factor
    pub alpha: f64,
    pub delay_secs: f64,
    pub sample_rate: u32,
}

impl Default for NaturalEchoConfig {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            alpha: DEFAULT_ALPHA,
            delay_secs: DEFAULT_DELAY_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// All-pass reverberator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverbConfig {
    /// Feedback gain (|alpha| < 1 for stability)
    pub alpha: f64,
    pub delay_secs: f64,
    pub sample_rate: u32,
}

impl Default for ReverbConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            delay_secs: DEFAULT_DELAY_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Amplitude modulation by a slow cosine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TremoloConfig {
    /// Modulation frequency in Hz
    pub freq_hz: f64,
    /// Depth divisor: larger values give shallower modulation
    pub gain: f64,
    pub sample_rate: u32,
}

impl Default for TremoloConfig {
    fn default() -> Self {
        Self {
            freq_hz: 5.0,
            gain: 2.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Sweeping short delay mixed with the dry signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlangerConfig {
    /// Sweep frequency in Hz
    pub freq_hz: f64,
    /// Half of the maximum sweep depth, in seconds
    pub max_delay_secs: f64,
    pub sample_rate: u32,
}

impl Default for FlangerConfig {
    fn default() -> Self {
        Self {
            freq_hz: 0.1,
            max_delay_secs: 0.002,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Sliding-window mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageConfig {
    /// Number of samples averaged
    pub window_size: usize,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self { window_size: 10 }
    }
}

/// One-pole low-pass smoother
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeakyIntegratorConfig {
    /// Pole position; 0 is a pass-through, values near 1 smooth heavily
    pub lambda: f64,
}

impl Default for LeakyIntegratorConfig {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }
}

/// Impulse responses for the two-channel cross-talk canceller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossTalkConfig {
    /// Same-side path (left speaker to left ear)
    pub ipsilateral: Vec<f64>,
    /// Cross-side path (right speaker to left ear)
    pub contralateral: Vec<f64>,
}

impl Default for CrossTalkConfig {
    fn default() -> Self {
        Self {
            ipsilateral: crate::signal_processing::crosstalk::DEFAULT_IPSILATERAL.to_vec(),
            contralateral: crate::signal_processing::crosstalk::DEFAULT_CONTRALATERAL.to_vec(),
        }
    }
}

/// A single-channel effect preset
///
/// Tagged by `effect`, e.g. `effect = "reverb"`, with the remaining keys
/// taken from the matching parameter struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EffectConfig {
    Coefficients(CoefficientConfig),
    Distortion(DistortionConfig),
    SimpleEcho(SimpleEchoConfig),
    NaturalEcho(NaturalEchoConfig),
    Reverb(ReverbConfig),
    Tremolo(TremoloConfig),
    Flanger(FlangerConfig),
    MovingAverage(MovingAverageConfig),
    LeakyIntegrator(LeakyIntegratorConfig),
}

impl EffectConfig {
    /// Build the configured effect
    ///
    /// # Errors
    /// Propagates the effect's own validation error.
    pub fn build(&self) -> Result<Box<dyn Filter>> {
        let filter: Box<dyn Filter> = match self {
            Self::Coefficients(c) => {
                Box::new(DifferenceEquation::new(&c.numerator, &c.denominator)?)
            }
            Self::Distortion(c) => Box::new(Distortion::new(c)?),
            Self::SimpleEcho(c) => Box::new(SimpleEcho::new(c)?),
            Self::NaturalEcho(c) => Box::new(NaturalEcho::new(c)?),
            Self::Reverb(c) => Box::new(Reverb::new(c)?),
            Self::Tremolo(c) => Box::new(Tremolo::new(c)?),
            Self::Flanger(c) => Box::new(Flanger::new(c)?),
            Self::MovingAverage(c) => Box::new(MovingAverage::new(c)?),
            Self::LeakyIntegrator(c) => Box::new(LeakyIntegrator::new(c)?),
        };
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    #[test]
    fn test_defaults() {
        let echo = SimpleEchoConfig::default();
        assert_eq!((echo.a, echo.b, echo.c), (1.0, 0.75, 0.5));
        assert_eq!(echo.sample_rate, 44_100);
        assert_eq!(MovingAverageConfig::default().window_size, 10);
        assert_eq!(CrossTalkConfig::default().ipsilateral.len(), 16);
        assert_eq!(CrossTalkConfig::default().contralateral.len(), 16);
    }

    #[test]
    fn test_partial_preset_uses_defaults() {
        let preset: EffectConfig = toml::from_str(
            r#"
            effect = "reverb"
            alpha = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(
            preset,
            EffectConfig::Reverb(ReverbConfig {
                alpha: 0.5,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_coefficient_preset() {
        let preset: EffectConfig = toml::from_str(
            r#"
            effect = "coefficients"
            numerator = [1.0, 1.0, 1.0]
            denominator = [3.0]
            "#,
        )
        .unwrap();
        let mut filter = preset.build().unwrap();
        let out = filter.process_batch(&[2.0, 3.0, 4.0, 6.0]);
        assert!((out[3] - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let parsed: std::result::Result<EffectConfig, _> = toml::from_str(r#"effect = "wah""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_build_propagates_validation_errors() {
        let preset = EffectConfig::MovingAverage(MovingAverageConfig { window_size: 0 });
        assert!(matches!(
            preset.build(),
            Err(FilterError::InvalidCoefficients(_))
        ));

        let preset = EffectConfig::Coefficients(CoefficientConfig {
            numerator: vec![1.0],
            denominator: vec![0.0],
        });
        assert!(preset.build().is_err());
    }

    #[test]
    fn test_every_default_builds() {
        let presets = [
            EffectConfig::Coefficients(Default::default()),
            EffectConfig::Distortion(Default::default()),
            EffectConfig::SimpleEcho(Default::default()),
            EffectConfig::NaturalEcho(Default::default()),
            EffectConfig::Reverb(Default::default()),
            EffectConfig::Tremolo(Default::default()),
            EffectConfig::Flanger(Default::default()),
            EffectConfig::MovingAverage(Default::default()),
            EffectConfig::LeakyIntegrator(Default::default()),
        ];
        for preset in &presets {
            assert!(preset.build().is_ok(), "{:?} failed to build", preset);
        }
    }
}
