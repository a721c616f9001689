//! Exponential distribution by inverse transform.

use super::{check_parameter, NumberGenerator, Parameter};
use crate::error::RngError;
use crate::source::RandomSource;

/// Exponential(`rate`) sampler: mean `1 / rate`, median `ln 2 / rate`.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{ExponentialGenerator, NumberGenerator};
/// use maths_random::MersenneTwisterRng;
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let exponential = ExponentialGenerator::new(3.2, MersenneTwisterRng::from_seed(&seed).unwrap()).unwrap();
/// assert!(exponential.next_value().unwrap() >= 0.0);
/// ```
pub struct ExponentialGenerator<R> {
    rng: R,
    rate: Parameter<f64>,
}

impl<R: RandomSource> ExponentialGenerator<R> {
    /// Creates a sampler with the given rate.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] unless `rate > 0`.
    pub fn new(rate: impl Into<Parameter<f64>>, rng: R) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            rate: rate.into(),
        };
        generator.validated_rate()?;
        Ok(generator)
    }

    fn validated_rate(&self) -> Result<f64, RngError> {
        let rate = self.rate.value();
        check_parameter(rate > 0.0 && rate.is_finite(), "rate", rate, "positive and finite")?;
        Ok(rate)
    }
}

impl<R: RandomSource> NumberGenerator<f64> for ExponentialGenerator<R> {
    fn next_value(&self) -> Result<f64, RngError> {
        let rate = self.validated_rate()?;
        // 1 - u lies in (0, 1], keeping the logarithm finite.
        Ok(-(1.0 - self.rng.next_f64()).ln() / rate)
    }
}
