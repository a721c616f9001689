//! Exact number types.
//!
//! [`Rational`] is a normalised vulgar fraction with 64-bit parts, for
//! probabilities and ratios that must not pick up floating-point error.

mod rational;

pub use rational::Rational;
