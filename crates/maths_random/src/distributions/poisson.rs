//! Poisson distribution by Knuth's multiplicative method.

use super::{check_parameter, NumberGenerator, Parameter};
use crate::error::RngError;
use crate::source::RandomSource;

/// Above this mean `e^-mean` underflows towards zero, so uniforms are
/// accumulated as a sum of logarithms instead of a product.
const LOG_SPACE_THRESHOLD: f64 = 500.0;

/// Largest accepted mean. Draws stay far below `i32::MAX` (the standard
/// deviation at this mean is about 3.2e4) and each costs one uniform per
/// unit of mean.
pub const MAX_POISSON_MEAN: f64 = 1e9;

/// Poisson(`mean`) sampler.
///
/// Multiplies uniforms until the running product drops to `e^-mean` and
/// returns the number of factors minus one. Cost grows linearly with the
/// mean.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{NumberGenerator, PoissonGenerator};
/// use maths_random::MersenneTwisterRng;
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let poisson = PoissonGenerator::new(19.0, MersenneTwisterRng::from_seed(&seed).unwrap()).unwrap();
/// assert!(poisson.next_value().unwrap() >= 0);
/// ```
pub struct PoissonGenerator<R> {
    rng: R,
    mean: Parameter<f64>,
}

impl<R: RandomSource> PoissonGenerator<R> {
    /// Creates a sampler with the given mean.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] unless `0 < mean <= `[`MAX_POISSON_MEAN`].
    pub fn new(mean: impl Into<Parameter<f64>>, rng: R) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            mean: mean.into(),
        };
        generator.validated_mean()?;
        Ok(generator)
    }

    fn validated_mean(&self) -> Result<f64, RngError> {
        let mean = self.mean.value();
        check_parameter(
            mean > 0.0 && mean <= MAX_POISSON_MEAN,
            "mean",
            mean,
            "positive and at most 1e9",
        )?;
        Ok(mean)
    }

    fn multiplicative(&self, mean: f64) -> i32 {
        let limit = (-mean).exp();
        let mut product = 1.0;
        let mut count: i32 = 0;
        loop {
            count = count.saturating_add(1);
            product *= self.rng.next_f64();
            if product <= limit {
                return count - 1;
            }
        }
    }

    fn logarithmic(&self, mean: f64) -> i32 {
        let mut log_sum = 0.0;
        let mut count: i32 = 0;
        loop {
            count = count.saturating_add(1);
            let u = self.rng.next_f64();
            if u == 0.0 {
                return count - 1;
            }
            log_sum += u.ln();
            if log_sum <= -mean {
                return count - 1;
            }
        }
    }
}

impl<R: RandomSource> NumberGenerator<i32> for PoissonGenerator<R> {
    fn next_value(&self) -> Result<i32, RngError> {
        let mean = self.validated_mean()?;
        Ok(if mean > LOG_SPACE_THRESHOLD {
            self.logarithmic(mean)
        } else {
            self.multiplicative(mean)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::AdjustableValue;
    use crate::engines::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::from_seed(&(1..=20).collect::<Vec<u8>>()).unwrap()
    }

    #[test]
    fn test_small_mean_mostly_zero() {
        let poisson = PoissonGenerator::new(0.01, rng()).unwrap();
        let zeros = (0..1000)
            .filter(|_| poisson.next_value().unwrap() == 0)
            .count();
        assert!(zeros > 950);
    }

    #[test]
    fn test_large_mean_uses_log_space() {
        let poisson = PoissonGenerator::new(1000.0, rng()).unwrap();
        let total: i64 = (0..200).map(|_| i64::from(poisson.next_value().unwrap())).sum();
        let mean = total as f64 / 200.0;
        assert!((mean - 1000.0).abs() < 30.0);
    }

    #[test]
    fn test_rejects_non_positive_mean() {
        for mean in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PoissonGenerator::new(mean, rng()),
                Err(RngError::InvalidParameter { name: "mean", .. })
            ));
        }
    }

    #[test]
    fn test_mean_beyond_integer_range_rejected() {
        assert!(PoissonGenerator::new(MAX_POISSON_MEAN, rng()).is_ok());
        for mean in [3e9, f64::MAX] {
            assert!(matches!(
                PoissonGenerator::new(mean, rng()),
                Err(RngError::InvalidParameter { name: "mean", .. })
            ));
        }
    }

    #[test]
    fn test_adjusted_mean_validated_at_draw() {
        let mean = AdjustableValue::new(4.0);
        let poisson = PoissonGenerator::new(&mean, rng()).unwrap();
        assert!(poisson.next_value().is_ok());
        mean.set(-2.0);
        assert!(poisson.next_value().is_err());
        mean.set(3e9);
        assert!(poisson.next_value().is_err());
    }
}
