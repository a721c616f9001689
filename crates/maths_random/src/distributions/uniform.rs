//! Continuous and discrete uniform distributions.

use maths_core::maths::restrict_range;

use super::{check_parameter, NumberGenerator, Parameter};
use crate::error::RngError;
use crate::source::RandomSource;

/// Uniform `f64` sampler over `[minimum, maximum)`.
///
/// Results are clamped to the bounds, so a span wider than `f64::MAX`
/// still yields finite values; rounding can then return `maximum` itself.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{ContinuousUniformGenerator, NumberGenerator};
/// use maths_random::XorShiftRng;
///
/// let seed: Vec<u8> = (1..=20).collect();
/// let uniform = ContinuousUniformGenerator::new(150.0, 500.0, XorShiftRng::from_seed(&seed).unwrap()).unwrap();
/// let value = uniform.next_value().unwrap();
/// assert!((150.0..500.0).contains(&value));
/// ```
pub struct ContinuousUniformGenerator<R> {
    rng: R,
    minimum: Parameter<f64>,
    maximum: Parameter<f64>,
}

impl<R: RandomSource> ContinuousUniformGenerator<R> {
    /// Creates a sampler over `[minimum, maximum)`.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] if `minimum > maximum` or either
    /// bound is not finite.
    pub fn new(
        minimum: impl Into<Parameter<f64>>,
        maximum: impl Into<Parameter<f64>>,
        rng: R,
    ) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            minimum: minimum.into(),
            maximum: maximum.into(),
        };
        generator.validated_bounds()?;
        Ok(generator)
    }

    fn validated_bounds(&self) -> Result<(f64, f64), RngError> {
        let minimum = self.minimum.value();
        let maximum = self.maximum.value();
        check_parameter(minimum.is_finite(), "minimum", minimum, "finite")?;
        check_parameter(
            maximum.is_finite() && maximum >= minimum,
            "maximum",
            maximum,
            "finite and not below the minimum",
        )?;
        Ok((minimum, maximum))
    }
}

impl<R: RandomSource> NumberGenerator<f64> for ContinuousUniformGenerator<R> {
    fn next_value(&self) -> Result<f64, RngError> {
        let (minimum, maximum) = self.validated_bounds()?;
        let u = self.rng.next_f64();
        let span = maximum - minimum;
        let value = if span.is_finite() {
            minimum + u * span
        } else {
            // Span overflows f64; interpolate between the bounds instead.
            minimum * (1.0 - u) + maximum * u
        };
        Ok(restrict_range(value, minimum, maximum))
    }
}

/// Uniform `i32` sampler over the inclusive range `[minimum, maximum]`.
///
/// Draws are unbiased: bounded values come from
/// [`RandomSource::next_u32_below`], which rejects the remainder band.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{DiscreteUniformGenerator, NumberGenerator};
/// use maths_random::XorShiftRng;
///
/// let seed: Vec<u8> = (1..=20).collect();
/// let dice = DiscreteUniformGenerator::new(1, 6, XorShiftRng::from_seed(&seed).unwrap()).unwrap();
/// assert!((1..=6).contains(&dice.next_value().unwrap()));
/// ```
pub struct DiscreteUniformGenerator<R> {
    rng: R,
    minimum: Parameter<i32>,
    maximum: Parameter<i32>,
}

impl<R: RandomSource> DiscreteUniformGenerator<R> {
    /// Creates a sampler over `[minimum, maximum]`.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] if `minimum > maximum`.
    pub fn new(
        minimum: impl Into<Parameter<i32>>,
        maximum: impl Into<Parameter<i32>>,
        rng: R,
    ) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            minimum: minimum.into(),
            maximum: maximum.into(),
        };
        generator.validated_bounds()?;
        Ok(generator)
    }

    fn validated_bounds(&self) -> Result<(i32, i32), RngError> {
        let minimum = self.minimum.value();
        let maximum = self.maximum.value();
        check_parameter(
            maximum >= minimum,
            "maximum",
            maximum,
            "not below the minimum",
        )?;
        Ok((minimum, maximum))
    }
}

impl<R: RandomSource> NumberGenerator<i32> for DiscreteUniformGenerator<R> {
    fn next_value(&self) -> Result<i32, RngError> {
        let (minimum, maximum) = self.validated_bounds()?;
        let range = i64::from(maximum) - i64::from(minimum) + 1;
        match u32::try_from(range) {
            Ok(bound) => {
                let offset = i64::from(self.rng.next_u32_below(bound));
                Ok((i64::from(minimum) + offset) as i32)
            }
            // Full 32-bit range: every word is a valid outcome.
            Err(_) => Ok(self.rng.next_u32() as i32),
        }
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
    fn test_continuous_within_bounds() {
        let uniform = ContinuousUniformGenerator::new(-2.5, 7.25, rng()).unwrap();
        for _ in 0..1000 {
            let value = uniform.next_value().unwrap();
            assert!((-2.5..7.25).contains(&value));
        }
    }

    #[test]
    fn test_continuous_extreme_bounds_stay_finite() {
        let uniform = ContinuousUniformGenerator::new(-f64::MAX, f64::MAX, rng()).unwrap();
        let mut data = Vec::with_capacity(1000);
        for _ in 0..1000 {
            let value = uniform.next_value().unwrap();
            assert!(value.is_finite(), "value {} is not finite", value);
            assert!((-f64::MAX..=f64::MAX).contains(&value));
            data.push(value);
        }
        assert!(data.iter().any(|&v| v < 0.0) && data.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_continuous_degenerate_range() {
        let uniform = ContinuousUniformGenerator::new(3.0, 3.0, rng()).unwrap();
        assert_eq!(uniform.next_value().unwrap(), 3.0);
    }

    #[test]
    fn test_continuous_rejects_inverted_bounds() {
        assert!(matches!(
            ContinuousUniformGenerator::new(5.0, 1.0, rng()),
            Err(RngError::InvalidParameter { name: "maximum", .. })
        ));
    }

    #[test]
    fn test_discrete_covers_inclusive_range() {
        let dice = DiscreteUniformGenerator::new(1, 6, rng()).unwrap();
        let mut seen = [false; 6];
        for _ in 0..600 {
            let value = dice.next_value().unwrap();
            assert!((1..=6).contains(&value));
            seen[(value - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_discrete_single_value() {
        let constant = DiscreteUniformGenerator::new(-4, -4, rng()).unwrap();
        assert_eq!(constant.next_value().unwrap(), -4);
    }

    #[test]
    fn test_discrete_full_range_uses_raw_words() {
        let full = DiscreteUniformGenerator::new(i32::MIN, i32::MAX, rng()).unwrap();
        let reference = rng();
        assert_eq!(full.next_value().unwrap(), reference.next_u32() as i32);
    }

    #[test]
    fn test_discrete_extreme_bounds() {
        let wide = DiscreteUniformGenerator::new(i32::MIN, 0, rng()).unwrap();
        for _ in 0..100 {
            assert!(wide.next_value().unwrap() <= 0);
        }
    }

    #[test]
    fn test_discrete_adjusted_bounds_validated_at_draw() {
        let maximum = AdjustableValue::new(10);
        let uniform = DiscreteUniformGenerator::new(5, &maximum, rng()).unwrap();
        assert!(uniform.next_value().is_ok());
        maximum.set(4);
        assert!(uniform.next_value().is_err());
    }
}
