//! # Distribution Samplers
//!
//! Non-uniform samplers layered on any [`RandomSource`](crate::RandomSource).
//! Each sampler owns its generator (pass a reference or an `Arc` to share
//! one) and exposes a single operation through [`NumberGenerator`].
//!
//! | Sampler | Parameters | Method |
//! |---|---|---|
//! | [`BinomialGenerator`] | `n >= 1`, `0 < p < 1` | exact bitwise decomposition of `p` |
//! | [`PoissonGenerator`] | `mean > 0` | Knuth's multiplicative method |
//! | [`ExponentialGenerator`] | `rate > 0` | inverse CDF |
//! | [`GaussianGenerator`] | `standard_deviation > 0` | Box-Muller with a cached spare |
//! | [`ContinuousUniformGenerator`] | `minimum <= maximum` | scaled `f64` draw |
//! | [`DiscreteUniformGenerator`] | `minimum <= maximum` | unbiased bounded integer |
//!
//! Parameters are [`Parameter`]s: fixed values or shared
//! [`AdjustableValue`] handles. They are re-read and re-validated on every
//! draw, so an adjustable parameter can be changed (or made invalid) between
//! draws without rebuilding the sampler.
//!
//! ## Usage Example
//!
//! ```rust
//! use maths_random::distributions::{AdjustableValue, BinomialGenerator, NumberGenerator};
//! use maths_random::MersenneTwisterRng;
//!
//! let seed: Vec<u8> = (1..=16).collect();
//! let rng = MersenneTwisterRng::from_seed(&seed).unwrap();
//!
//! let n = AdjustableValue::new(20);
//! let binomial = BinomialGenerator::new(n.clone(), 0.163, rng).unwrap();
//! assert!(binomial.next_value().unwrap() <= 20);
//!
//! n.set(5);
//! assert!(binomial.next_value().unwrap() <= 5);
//! ```

mod binomial;
mod exponential;
mod gaussian;
mod parameter;
mod poisson;
mod uniform;

pub use binomial::BinomialGenerator;
pub use exponential::ExponentialGenerator;
pub use gaussian::GaussianGenerator;
pub use parameter::{AdjustableValue, Parameter};
pub use poisson::{PoissonGenerator, MAX_POISSON_MEAN};
pub use uniform::{ContinuousUniformGenerator, DiscreteUniformGenerator};

use std::fmt::Display;

use crate::error::RngError;

/// A source of values following some distribution.
pub trait NumberGenerator<T> {
    /// Draws the next value.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] if a parameter is outside its domain
    /// at the time of the draw.
    fn next_value(&self) -> Result<T, RngError>;
}

impl<T, G: NumberGenerator<T> + ?Sized> NumberGenerator<T> for &G {
    fn next_value(&self) -> Result<T, RngError> {
        (**self).next_value()
    }
}

impl<T, G: NumberGenerator<T> + ?Sized> NumberGenerator<T> for Box<G> {
    fn next_value(&self) -> Result<T, RngError> {
        (**self).next_value()
    }
}

/// Fails with [`RngError::InvalidParameter`] unless `valid`.
fn check_parameter<V: Display>(
    valid: bool,
    name: &'static str,
    value: V,
    constraint: &'static str,
) -> Result<(), RngError> {
    if valid {
        Ok(())
    } else {
        Err(RngError::invalid_parameter(name, value, constraint))
    }
}
