//! Shared defaults for effect parameters
//!
//! These match conventional audio-processing choices and are used by the
//! `Default` impls in [`crate::config`].

/// Default audio sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default echo/reverb delay in seconds (20 ms).
pub const DEFAULT_DELAY_SECS: f64 = 0.02;

/// Default feedback coefficient for reverb and natural echo.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// Default pole position for the leaky integrator and natural echo.
pub const DEFAULT_LAMBDA: f64 = 0.6;

/// Longest delay, in samples, any effect may derive (about 95 s at 44.1 kHz).
pub const MAX_DELAY_SAMPLES: usize = 1 << 22;
