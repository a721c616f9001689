//! Small numeric helpers shared by the statistics and combinatorics modules.

/// Largest `n` for which `n!` fits in a `u64`.
pub const MAX_FACTORIAL: u64 = 20;

/// Pre-computed factorials `0! ..= 20!`.
const FACTORIALS: [u64; 21] = {
    let mut table = [1u64; 21];
    let mut i = 1;
    while i < 21 {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// Returns `n!`, or `None` if the result would overflow a `u64` (`n > 20`).
///
/// # Examples
///
/// ```
/// use maths_core::maths::factorial;
///
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
#[inline]
pub fn factorial(n: u64) -> Option<u64> {
    FACTORIALS.get(n as usize).copied()
}

/// Integer power with overflow detection.
///
/// Returns `None` if `base^exponent` does not fit in a `u64`.
#[inline]
pub fn raise_to_power(base: u64, exponent: u32) -> Option<u64> {
    base.checked_pow(exponent)
}

/// Logarithm of `arg` in an arbitrary `base`.
#[inline]
pub fn log(base: f64, arg: f64) -> f64 {
    arg.ln() / base.ln()
}

/// Checks whether `value` lies within a relative `tolerance` of `target`.
///
/// The tolerance is expressed as a fraction of `target`, so
/// `approx_equals(102.0, 100.0, 0.02)` holds but `approx_equals(103.0, 100.0, 0.02)`
/// does not.
///
/// # Panics
///
/// Panics if `tolerance` is outside `[0, 1]`.
pub fn approx_equals(value: f64, target: f64, tolerance: f64) -> bool {
    assert!(
        (0.0..=1.0).contains(&tolerance),
        "tolerance must be between 0 and 1, got {}",
        tolerance
    );
    (target - value).abs() <= (target * tolerance).abs()
}

/// Clamps `value` into `[min, max]`.
#[inline]
pub fn restrict_range<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `greatest_common_divisor(0, 0)` is `0`.
pub fn greatest_common_divisor(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
