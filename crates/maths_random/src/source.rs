//! The generator capability traits and typed-draw adapters.
//!
//! Every engine implements [`RandomSource`] by supplying 32-bit output words.
//! All wider or typed draws are derived from those words in one place, so the
//! five engines agree exactly on how a `u64`, an `f64` or a bounded integer is
//! assembled.

use std::fmt;
use std::sync::Arc;

use crate::engines::Algorithm;
use crate::error::RngError;

/// A source of uniformly distributed 32-bit words.
///
/// Implementations serialise access to their working state internally, so
/// every method takes `&self` and a single instance can be shared between
/// threads (behind a reference or an [`Arc`]). The order in which concurrent
/// callers receive draws is unspecified, but every draw comes from the
/// generator's single sequence.
///
/// # Examples
///
/// ```
/// use maths_random::{MersenneTwisterRng, RandomSource};
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let rng = MersenneTwisterRng::from_seed(&seed).unwrap();
///
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// assert!(rng.next_u32_below(6) < 6);
/// ```
pub trait RandomSource {
    /// Next full 32-bit output word.
    fn next_u32(&self) -> u32;

    /// Next `bits`-wide value, taken from the top bits of one output word.
    ///
    /// This is the primitive every typed draw is built from.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= bits <= 32`.
    #[inline]
    fn next_bits(&self, bits: u32) -> u32 {
        assert!(
            (1..=32).contains(&bits),
            "bit count must be between 1 and 32, got {}",
            bits
        );
        self.next_u32() >> (32 - bits)
    }

    /// Next output word reinterpreted as a signed integer.
    #[inline]
    fn next_i32(&self) -> i32 {
        self.next_u32() as i32
    }

    /// Two chained words, the first forming the high half.
    #[inline]
    fn next_u64(&self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Uniform `f64` in `[0, 1)` built from 53 random bits.
    #[inline]
    fn next_f64(&self) -> f64 {
        let high = u64::from(self.next_bits(26));
        let low = u64::from(self.next_bits(27));
        ((high << 27) + low) as f64 / (1u64 << 53) as f64
    }

    /// Uniform `f32` in `[0, 1)` built from 24 random bits.
    #[inline]
    fn next_f32(&self) -> f32 {
        self.next_bits(24) as f32 / (1u32 << 24) as f32
    }

    /// Fair coin.
    #[inline]
    fn next_bool(&self) -> bool {
        self.next_bits(1) != 0
    }

    /// Uniform integer in `[0, bound)` without modulo bias.
    ///
    /// Powers of two are scaled from a single word; other bounds reject the
    /// words below `2^32 mod bound` so every residue is equally likely.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn next_u32_below(&self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");
        if bound.is_power_of_two() {
            return ((u64::from(bound) * u64::from(self.next_u32())) >> 32) as u32;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let word = self.next_u32();
            if word >= threshold {
                return word % bound;
            }
        }
    }

    /// Fills `dest` with output words in big-endian order.
    ///
    /// A trailing partial word contributes its leading bytes.
    fn fill_bytes(&self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_be_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    #[inline]
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
    #[inline]
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

/// A generator whose whole sequence is reproducible from its seed.
///
/// Equality and hashing of the engines are defined over the algorithm and
/// the seed, never over the transient working state.
pub trait RepeatableRng: RandomSource + Send + Sync + fmt::Debug {
    /// A copy of the seed this instance was constructed from.
    fn seed(&self) -> Vec<u8>;

    /// The registry entry for this generator.
    fn algorithm(&self) -> Algorithm;
}

/// A generator that can fold external entropy into its state.
pub trait Reseed {
    /// Mixes `input` into the generator's key material.
    ///
    /// The existing state always contributes to the result, so reseeding
    /// never reduces entropy.
    ///
    /// # Errors
    ///
    /// [`RngError::RuntimeEnvironment`] if the underlying primitive rejects
    /// the derived key.
    fn reseed(&self, input: u64) -> Result<(), RngError>;
}

impl<R: Reseed + ?Sized> Reseed for Arc<R> {
    fn reseed(&self, input: u64) -> Result<(), RngError> {
        (**self).reseed(input)
    }
}

/// Bridges any [`RandomSource`] into the `rand` ecosystem.
///
/// # Examples
///
/// ```
/// use maths_random::{RngCoreAdapter, XorShiftRng};
/// use rand::Rng;
///
/// let seed: Vec<u8> = (1..=20).collect();
/// let mut rng = RngCoreAdapter::new(XorShiftRng::from_seed(&seed).unwrap());
/// let roll: u8 = rng.gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct RngCoreAdapter<R> {
    inner: R,
}

impl<R: RandomSource> RngCoreAdapter<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped generator.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RandomSource> rand::RngCore for RngCoreAdapter<R> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.fill_bytes(dest);
        Ok(())
    }
}
