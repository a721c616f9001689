//! Normalised 64-bit fractions.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::maths::greatest_common_divisor;
use crate::types::RationalError;

/// A fraction `numerator / denominator` held in lowest terms.
///
/// The denominator is always positive and shares no factor with the
/// numerator, so structural equality and hashing agree with numeric
/// equality: `3/6` and `1/2` are the same value.
///
/// The `checked_*` methods report overflow and division by zero as
/// [`RationalError`]; the operators panic on the same conditions, as the
/// integer operators do.
///
/// # Examples
///
/// ```
/// use maths_core::number::Rational;
///
/// let third = Rational::new(1, 3).unwrap();
/// let sixth = Rational::new(1, 6).unwrap();
/// assert_eq!(third + sixth, Rational::HALF);
/// assert_eq!((third * sixth).to_string(), "1/18");
/// assert_eq!("1.25".parse::<Rational>().unwrap(), Rational::new(5, 4).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// `0`
    pub const ZERO: Rational = Rational::integer(0);
    /// `1/4`
    pub const QUARTER: Rational = Rational::reduced(1, 4);
    /// `1/3`
    pub const THIRD: Rational = Rational::reduced(1, 3);
    /// `1/2`
    pub const HALF: Rational = Rational::reduced(1, 2);
    /// `2/3`
    pub const TWO_THIRDS: Rational = Rational::reduced(2, 3);
    /// `3/4`
    pub const THREE_QUARTERS: Rational = Rational::reduced(3, 4);
    /// `1`
    pub const ONE: Rational = Rational::integer(1);

    /// Creates the fraction `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// [`RationalError::NonPositiveDenominator`] if `denominator < 1`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator < 1 {
            return Err(RationalError::NonPositiveDenominator { denominator });
        }
        Ok(Self::normalised(numerator, denominator))
    }

    /// Creates the whole number `value`.
    pub const fn integer(value: i64) -> Self {
        Self::reduced(value, 1)
    }

    // Caller guarantees lowest terms and a positive denominator.
    const fn reduced(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn normalised(numerator: i64, denominator: i64) -> Self {
        // denominator >= 1, so the divisor is in 1..=i64::MAX
        let divisor = greatest_common_divisor(numerator.unsigned_abs(), denominator as u64) as i64;
        Self::reduced(numerator / divisor, denominator / divisor)
    }

    /// Numerator in lowest terms; carries the sign.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator in lowest terms; always at least 1.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Whether the value is a whole number.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Nearest `f64` to the fraction.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Integer part, rounded toward zero.
    #[inline]
    pub const fn trunc(self) -> i64 {
        self.numerator / self.denominator
    }

    /// Sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// [`RationalError::Overflow`] if the result does not fit in 64-bit parts.
    pub fn checked_add(self, other: Rational) -> Result<Self, RationalError> {
        self.combine(other, "sum", i64::checked_add)
    }

    /// Difference `self - other`.
    ///
    /// # Errors
    ///
    /// [`RationalError::Overflow`] if the result does not fit in 64-bit parts.
    pub fn checked_sub(self, other: Rational) -> Result<Self, RationalError> {
        self.combine(other, "difference", i64::checked_sub)
    }

    /// Product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// [`RationalError::Overflow`] if the result does not fit in 64-bit parts.
    pub fn checked_mul(self, other: Rational) -> Result<Self, RationalError> {
        let overflow = || RationalError::Overflow {
            operation: "product",
        };
        // Cross-cancel first so the products stay as small as possible.
        let left = greatest_common_divisor(self.numerator.unsigned_abs(), other.denominator as u64) as i64;
        let right = greatest_common_divisor(other.numerator.unsigned_abs(), self.denominator as u64) as i64;
        let numerator = (self.numerator / left)
            .checked_mul(other.numerator / right)
            .ok_or_else(overflow)?;
        let denominator = (self.denominator / right)
            .checked_mul(other.denominator / left)
            .ok_or_else(overflow)?;
        Ok(Self::reduced(numerator, denominator))
    }

    /// Quotient `self / other`.
    ///
    /// # Errors
    ///
    /// [`RationalError::DivisionByZero`] if `other` is zero;
    /// [`RationalError::Overflow`] if the result does not fit in 64-bit parts.
    pub fn checked_div(self, other: Rational) -> Result<Self, RationalError> {
        self.checked_mul(other.checked_recip()?)
    }

    /// Reciprocal `1 / self`.
    ///
    /// # Errors
    ///
    /// [`RationalError::DivisionByZero`] if `self` is zero;
    /// [`RationalError::Overflow`] for `1 / i64::MIN`.
    pub fn checked_recip(self) -> Result<Self, RationalError> {
        match self.numerator.cmp(&0) {
            Ordering::Equal => Err(RationalError::DivisionByZero),
            Ordering::Greater => Ok(Self::reduced(self.denominator, self.numerator)),
            Ordering::Less => {
                let overflow = || RationalError::Overflow {
                    operation: "reciprocal",
                };
                Ok(Self::reduced(
                    self.denominator.checked_neg().ok_or_else(overflow)?,
                    self.numerator.checked_neg().ok_or_else(overflow)?,
                ))
            }
        }
    }

    fn combine(
        self,
        other: Rational,
        operation: &'static str,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<Self, RationalError> {
        if self.denominator == other.denominator {
            let numerator = op(self.numerator, other.numerator)
                .ok_or(RationalError::Overflow { operation })?;
            return Ok(Self::normalised(numerator, self.denominator));
        }
        // Scale both sides to the least common denominator.
        let common = greatest_common_divisor(self.denominator as u64, other.denominator as u64) as i64;
        let left_scale = other.denominator / common;
        let right_scale = self.denominator / common;
        let overflow = || RationalError::Overflow { operation };
        let denominator = self
            .denominator
            .checked_mul(left_scale)
            .ok_or_else(overflow)?;
        let left = self.numerator.checked_mul(left_scale).ok_or_else(overflow)?;
        let right = other.numerator.checked_mul(right_scale).ok_or_else(overflow)?;
        let numerator = op(left, right).ok_or_else(overflow)?;
        Ok(Self::normalised(numerator, denominator))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = i128::from(self.numerator) * i128::from(other.denominator);
        let right = i128::from(other.numerator) * i128::from(self.denominator);
        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whole numbers print without a denominator: `4`, `-3/2`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Parses `n/d` fractions, integers and exact decimals (`-1.25`).
///
/// Trailing zeros after the decimal point do not count towards the
/// denominator, so `1.2000000000000000000000` parses as `6/5`.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RationalError::InvalidFormat {
            input: s.to_string(),
        };
        let text = s.trim();
        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = parse_integer(numerator.trim()).ok_or_else(invalid)??;
            let denominator = parse_integer(denominator.trim()).ok_or_else(invalid)??;
            return Self::new(numerator, denominator);
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        let fraction = fraction.trim_end_matches('0');

        let overflow = || RationalError::Overflow {
            operation: "decimal conversion",
        };
        let digits = format!("{}{}{}", if negative { "-" } else { "" }, whole, fraction);
        let numerator = digits.parse::<i64>().map_err(|_| overflow())?;
        let scale = u32::try_from(fraction.len()).map_err(|_| overflow())?;
        let denominator = 10i64.checked_pow(scale).ok_or_else(overflow)?;
        Self::new(numerator, denominator)
    }
}

// None for malformed text; Some(Err) for digits that overflow an i64.
fn parse_integer(text: &str) -> Option<Result<i64, RationalError>> {
    let digits = text.strip_prefix(|c| c == '-' || c == '+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<i64>().map_err(|_| RationalError::Overflow {
        operation: "integer conversion",
    }))
}

macro_rules! impl_panicking_operator {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            /// # Panics
            ///
            /// On overflow or division by zero; use the `checked_*` form to
            /// handle those as errors.
            fn $method(self, rhs: Rational) -> Rational {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("{}", err),
                }
            }
        }
    };
}

impl_panicking_operator!(Add, add, checked_add);
impl_panicking_operator!(Sub, sub, checked_sub);
impl_panicking_operator!(Mul, mul, checked_mul);
impl_panicking_operator!(Div, div, checked_div);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_equality_and_hash() {
        let a = r(3, 4);
        let b = r(6, 8);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(Rational::ONE, Rational::HALF);

        let set: HashSet<Rational> = [a, b, Rational::THREE_QUARTERS].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering() {
        let three_quarters = r(3, 4);
        let nine_tenths = r(9, 10);
        assert_eq!(three_quarters.cmp(&r(3, 4)), Ordering::Equal);
        assert!(three_quarters < nine_tenths);
        assert!(nine_tenths > three_quarters);
        assert!(r(-1, 2) < Rational::ZERO);

        let mut values = vec![Rational::ONE, Rational::THIRD, Rational::HALF, Rational::QUARTER];
        values.sort();
        assert_eq!(
            values,
            vec![Rational::QUARTER, Rational::THIRD, Rational::HALF, Rational::ONE]
        );
    }

    #[test]
    fn test_lowest_terms() {
        let half = r(3, 6);
        assert_eq!(half.numerator(), 1);
        assert_eq!(half.denominator(), 2);

        let negative = r(-9, 12);
        assert_eq!((negative.numerator(), negative.denominator()), (-3, 4));
        assert_eq!(r(0, 7), Rational::ZERO);
    }

    #[test]
    fn test_multiply() {
        let product = r(2, 3) * r(1, 2);
        assert_eq!((product.numerator(), product.denominator()), (1, 3));
    }

    #[test]
    fn test_divide() {
        let quotient = r(2, 3) / r(1, 2);
        assert_eq!((quotient.numerator(), quotient.denominator()), (4, 3));
        assert_eq!(r(1, 2) / r(-1, 4), Rational::integer(-2));
    }

    #[test]
    fn test_add_same_denominator() {
        let sum = r(2, 5) + r(1, 5);
        assert_eq!((sum.numerator(), sum.denominator()), (3, 5));
    }

    #[test]
    fn test_add_different_denominators() {
        let sum = r(1, 3) + r(1, 6);
        assert_eq!((sum.numerator(), sum.denominator()), (1, 2));
    }

    #[test]
    fn test_subtract_same_denominator() {
        let difference = r(3, 5) - r(1, 5);
        assert_eq!((difference.numerator(), difference.denominator()), (2, 5));
    }

    #[test]
    fn test_subtract_different_denominators() {
        let difference = r(11, 20) - r(1, 7);
        assert_eq!((difference.numerator(), difference.denominator()), (57, 140));
    }

    #[test]
    fn test_display() {
        assert_eq!(r(4, 5).to_string(), "4/5");
        assert_eq!(r(3, 2).to_string(), "3/2");
        assert_eq!(r(8, 2).to_string(), "4");
        assert_eq!(r(-1, 3).to_string(), "-1/3");
    }

    #[test]
    fn test_rejects_non_positive_denominator() {
        assert_eq!(
            Rational::new(2, 0),
            Err(RationalError::NonPositiveDenominator { denominator: 0 })
        );
        assert_eq!(
            Rational::new(1, -2),
            Err(RationalError::NonPositiveDenominator { denominator: -2 })
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Rational::ONE.checked_div(Rational::ZERO),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_division_operator_panics_on_zero() {
        let _ = Rational::HALF / Rational::ZERO;
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Rational::integer(i64::MAX);
        assert!(matches!(
            big.checked_add(Rational::ONE),
            Err(RationalError::Overflow { operation: "sum" })
        ));
        assert!(matches!(
            r(1, i64::MAX).checked_mul(r(1, 2)),
            Err(RationalError::Overflow { operation: "product" })
        ));
        assert!(Rational::integer(i64::MIN).checked_recip().is_err());
    }

    #[test]
    fn test_cross_cancellation_avoids_overflow() {
        let a = r(i64::MAX, 3);
        let b = r(3, i64::MAX);
        assert_eq!(a.checked_mul(b), Ok(Rational::ONE));
    }

    #[test]
    fn test_decimal_parsing() {
        assert_eq!("1.2".parse::<Rational>().unwrap(), r(6, 5));
        assert_eq!("1.20000000000000000000000000".parse::<Rational>().unwrap(), r(6, 5));
        assert_eq!("-0.125".parse::<Rational>().unwrap(), r(-1, 8));
        assert_eq!(".5".parse::<Rational>().unwrap(), Rational::HALF);
        assert_eq!("3.000".parse::<Rational>().unwrap(), Rational::integer(3));
        assert_eq!("42".parse::<Rational>().unwrap(), Rational::integer(42));
    }

    #[test]
    fn test_fraction_parsing() {
        assert_eq!("9/12".parse::<Rational>().unwrap(), Rational::THREE_QUARTERS);
        assert_eq!(" -2 / 6 ".parse::<Rational>().unwrap(), r(-1, 3));
        assert!(matches!(
            "1/0".parse::<Rational>(),
            Err(RationalError::NonPositiveDenominator { denominator: 0 })
        ));
    }

    #[test]
    fn test_malformed_text_rejected() {
        for text in ["", ".", "-", "1.2.3", "abc", "1/", "/2", "1e5", "0x10"] {
            assert!(
                matches!(text.parse::<Rational>(), Err(RationalError::InvalidFormat { .. })),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_excess_decimal_precision_overflows() {
        assert!(matches!(
            "0.00000000000000000001".parse::<Rational>(),
            Err(RationalError::Overflow { .. })
        ));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Rational::THREE_QUARTERS.to_f64(), 0.75);
        assert_eq!(f64::from(r(-1, 4)), -0.25);
        assert_eq!(r(7, 2).trunc(), 3);
        assert_eq!(r(-7, 2).trunc(), -3);
    }
}
