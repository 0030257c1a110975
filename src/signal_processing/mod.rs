pub mod crosstalk;
pub mod delay_line;
pub mod difference_equation;
pub mod distortion;
pub mod echo;
pub mod filter;
pub mod flanger;
pub mod leaky_integrator;
pub mod math;
pub mod moving_average;
pub mod reverb;
pub mod tremolo;

pub use crosstalk::CrossTalkCanceller;
pub use delay_line::DelayLine;
pub use difference_equation::DifferenceEquation;
pub use distortion::Distortion;
pub use echo::{NaturalEcho, SimpleEcho};
pub use filter::Filter;
pub use flanger::Flanger;
pub use leaky_integrator::LeakyIntegrator;
pub use moving_average::MovingAverage;
pub use reverb::Reverb;
pub use tremolo::Tremolo;
