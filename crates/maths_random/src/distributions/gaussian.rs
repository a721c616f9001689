//! Normal distribution by the Box-Muller transform.

use std::f64::consts::TAU;
use std::sync::Mutex;

use super::{check_parameter, NumberGenerator, Parameter};
use crate::engines::lock;
use crate::error::RngError;
use crate::source::RandomSource;

/// Gaussian(`mean`, `standard_deviation`) sampler.
///
/// Each transform yields two independent standard normal deviates; the
/// second is kept and scaled by whatever parameters are current on the next
/// draw, so changing an adjustable parameter never leaks a stale value.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{GaussianGenerator, NumberGenerator};
/// use maths_random::MersenneTwisterRng;
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let gaussian = GaussianGenerator::new(147.0, 17.0, MersenneTwisterRng::from_seed(&seed).unwrap()).unwrap();
/// assert!(gaussian.next_value().unwrap().is_finite());
/// ```
pub struct GaussianGenerator<R> {
    rng: R,
    mean: Parameter<f64>,
    standard_deviation: Parameter<f64>,
    spare: Mutex<Option<f64>>,
}

impl<R: RandomSource> GaussianGenerator<R> {
    /// Creates a sampler with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] unless the mean is finite and the
    /// standard deviation is positive.
    pub fn new(
        mean: impl Into<Parameter<f64>>,
        standard_deviation: impl Into<Parameter<f64>>,
        rng: R,
    ) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            mean: mean.into(),
            standard_deviation: standard_deviation.into(),
            spare: Mutex::new(None),
        };
        generator.validated_parameters()?;
        Ok(generator)
    }

    fn validated_parameters(&self) -> Result<(f64, f64), RngError> {
        let mean = self.mean.value();
        let sd = self.standard_deviation.value();
        check_parameter(mean.is_finite(), "mean", mean, "finite")?;
        check_parameter(
            sd > 0.0 && sd.is_finite(),
            "standard_deviation",
            sd,
            "positive and finite",
        )?;
        Ok((mean, sd))
    }

    /// One standard normal deviate, from the spare if one is cached.
    fn standard_deviate(&self) -> f64 {
        let mut spare = lock(&self.spare);
        if let Some(value) = spare.take() {
            return value;
        }
        let radius = (-2.0 * (1.0 - self.rng.next_f64()).ln()).sqrt();
        let angle = TAU * self.rng.next_f64();
        *spare = Some(radius * angle.sin());
        radius * angle.cos()
    }
}

impl<R: RandomSource> NumberGenerator<f64> for GaussianGenerator<R> {
    fn next_value(&self) -> Result<f64, RngError> {
        let (mean, sd) = self.validated_parameters()?;
        Ok(mean + sd * self.standard_deviate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::AdjustableValue;
    use crate::engines::MersenneTwisterRng;
    use approx::assert_relative_eq;

    fn rng() -> MersenneTwisterRng {
        MersenneTwisterRng::from_seed(&(1..=16).collect::<Vec<u8>>()).unwrap()
    }

    #[test]
    fn test_pair_shares_one_transform() {
        let gaussian = GaussianGenerator::new(0.0, 1.0, rng()).unwrap();
        let first = gaussian.next_value().unwrap();
        let second = gaussian.next_value().unwrap();

        let reference = rng();
        let radius = (-2.0 * (1.0 - reference.next_f64()).ln()).sqrt();
        let angle = TAU * reference.next_f64();
        assert_relative_eq!(first, radius * angle.cos());
        assert_relative_eq!(second, radius * angle.sin());
    }

    #[test]
    fn test_spare_rescaled_by_current_parameters() {
        let mean = AdjustableValue::new(0.0);
        let gaussian = GaussianGenerator::new(&mean, 1.0, rng()).unwrap();
        let plain = GaussianGenerator::new(0.0, 1.0, rng()).unwrap();
        gaussian.next_value().unwrap();
        plain.next_value().unwrap();
        mean.set(100.0);
        assert_relative_eq!(
            gaussian.next_value().unwrap(),
            plain.next_value().unwrap() + 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_invalid_deviation_keeps_spare() {
        let sd = AdjustableValue::new(1.0);
        let gaussian = GaussianGenerator::new(0.0, &sd, rng()).unwrap();
        let plain = GaussianGenerator::new(0.0, 1.0, rng()).unwrap();
        gaussian.next_value().unwrap();
        plain.next_value().unwrap();

        sd.set(-1.0);
        assert!(matches!(
            gaussian.next_value(),
            Err(RngError::InvalidParameter {
                name: "standard_deviation",
                ..
            })
        ));
        sd.set(1.0);
        assert_relative_eq!(gaussian.next_value().unwrap(), plain.next_value().unwrap());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(GaussianGenerator::new(0.0, 0.0, rng()).is_err());
        assert!(GaussianGenerator::new(f64::NAN, 1.0, rng()).is_err());
    }
}
