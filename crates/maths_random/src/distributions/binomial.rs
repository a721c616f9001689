//! Binomial distribution by bitwise decomposition of the probability.

use std::sync::Mutex;

use maths_core::binary::{double_to_fixed_point_bits, BitString};

use super::{check_parameter, NumberGenerator, Parameter};
use crate::engines::lock;
use crate::error::RngError;
use crate::source::RandomSource;

/// Binomial(`n`, `p`) sampler.
///
/// Rather than running `n` Bernoulli trials, `p` is expanded into its exact
/// binary fraction and each trial is compared against it bit by bit, most
/// significant first. One fair-coin [`BitString`] over the still-undecided
/// trials settles all of them at each bit, so a draw costs roughly
/// `n / 32 * log2(n)` words. The result is exact for the representable `p`:
/// mean `n * p`, variance `n * p * (1 - p)`.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::{BinomialGenerator, NumberGenerator};
/// use maths_random::MersenneTwisterRng;
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let binomial = BinomialGenerator::new(20, 0.163, MersenneTwisterRng::from_seed(&seed).unwrap()).unwrap();
/// let successes = binomial.next_value().unwrap();
/// assert!((0..=20).contains(&successes));
/// ```
pub struct BinomialGenerator<R> {
    rng: R,
    n: Parameter<i32>,
    p: Parameter<f64>,
    /// Fixed-point expansion of the last `p` seen.
    p_bits: Mutex<Option<(f64, BitString)>>,
}

impl<R: RandomSource> BinomialGenerator<R> {
    /// Creates a sampler with `n` trials of success probability `p`.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidParameter`] if `n < 1` or `p` is outside `(0, 1)`.
    pub fn new(
        n: impl Into<Parameter<i32>>,
        p: impl Into<Parameter<f64>>,
        rng: R,
    ) -> Result<Self, RngError> {
        let generator = Self {
            rng,
            n: n.into(),
            p: p.into(),
            p_bits: Mutex::new(None),
        };
        generator.validated_parameters()?;
        Ok(generator)
    }

    fn validated_parameters(&self) -> Result<(i32, f64), RngError> {
        let n = self.n.value();
        let p = self.p.value();
        check_parameter(n >= 1, "n", n, "at least 1")?;
        check_parameter(p > 0.0 && p < 1.0, "p", p, "strictly between 0 and 1")?;
        Ok((n, p))
    }

    /// Number of fair-coin heads among `trials` coins.
    fn count_heads(&self, trials: usize) -> usize {
        BitString::random(trials, || self.rng.next_u32()).count_set_bits()
    }
}

impl<R: RandomSource> NumberGenerator<i32> for BinomialGenerator<R> {
    fn next_value(&self) -> Result<i32, RngError> {
        let (n, p) = self.validated_parameters()?;

        let mut cache = lock(&self.p_bits);
        if !matches!(&*cache, Some((cached, _)) if cached.to_bits() == p.to_bits()) {
            let bits = double_to_fixed_point_bits(p)
                .map_err(|_| RngError::invalid_parameter("p", p, "strictly between 0 and 1"))?;
            *cache = Some((p, bits));
        }
        let Some((_, bits)) = cache.as_ref() else {
            return Err(RngError::invalid_parameter("p", p, "strictly between 0 and 1"));
        };

        let mut trials = n as usize;
        let mut successes = 0;
        for index in (0..bits.len()).rev() {
            if trials == 0 {
                break;
            }
            let heads = self.count_heads(trials);
            trials -= heads;
            if bits.get_bit(index) {
                successes += heads;
            }
        }
        Ok(successes as i32)
    }
}
