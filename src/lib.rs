//! Linear time-invariant filters over streams of real-valued samples.
//!
//! The core is [`DifferenceEquation`](signal_processing::DifferenceEquation),
//! which evaluates a constant-coefficient difference equation one sample at
//! a time over ring-buffer delay lines. The effects in
//! [`signal_processing`] are either fixed coefficient sets for it (echo,
//! reverb, moving average, leaky integrator) or closed-form per-sample
//! transforms (tremolo, distortion, flanger), all behind the
//! [`Filter`](signal_processing::Filter) trait.

pub mod config;
pub mod constants;
pub mod error;
pub mod signal_processing;

pub use config::EffectConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{CrossTalkCanceller, DifferenceEquation, Filter};
