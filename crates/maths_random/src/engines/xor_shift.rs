//! Marsaglia's five-register xorshift generator.

use std::sync::Mutex;

use tracing::debug;

use super::{impl_seed_identity, lock, Algorithm};
use crate::error::RngError;
use crate::seed::{DefaultSeedSource, SeedSource};
use crate::source::RandomSource;

/// Very fast generator with a period of about 2^160.
///
/// Five 32-bit registers are loaded big-endian from a 20-byte seed; each draw
/// shifts and xors them once. The right shift of the first register is
/// arithmetic (sign-propagating), as in Marsaglia's signed-integer formulation. Statistically adequate for simulation, but the
/// shortest-period engine in this crate.
///
/// # Examples
///
/// ```
/// use maths_random::{RandomSource, XorShiftRng};
///
/// let seed: Vec<u8> = (1..=20).collect();
/// let rng = XorShiftRng::from_seed(&seed).unwrap();
/// assert_eq!(rng.next_u32(), 0x51C4_0F26);
/// ```
pub struct XorShiftRng {
    seed: [u8; XorShiftRng::SEED_SIZE_BYTES],
    state: Mutex<[u32; 5]>,
}

impl XorShiftRng {
    /// Exact seed length.
    pub const SEED_SIZE_BYTES: usize = 20;

    /// Creates a generator seeded from the [`DefaultSeedSource`].
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if no seed could be obtained.
    pub fn new() -> Result<Self, RngError> {
        Self::from_seed_source(&DefaultSeedSource)
    }

    /// Creates a generator seeded with bytes drawn from `source`.
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if the source fails.
    pub fn from_seed_source(source: &dyn SeedSource) -> Result<Self, RngError> {
        Self::from_seed(&source.generate_seed(Self::SEED_SIZE_BYTES)?)
    }

    /// Creates a generator from an explicit 20-byte seed.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] unless the seed is exactly 20 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, RngError> {
        let seed: [u8; Self::SEED_SIZE_BYTES] = seed.try_into().map_err(|_| {
            RngError::seed_length(Algorithm::XorShift.name(), "20", seed.len())
        })?;
        let mut registers = [0u32; 5];
        for (register, word) in registers.iter_mut().zip(seed.chunks_exact(4)) {
            *register = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        debug!(algorithm = %Algorithm::XorShift, seed_length = seed.len(), "generator constructed");
        Ok(Self {
            seed,
            state: Mutex::new(registers),
        })
    }
}

impl RandomSource for XorShiftRng {
    fn next_u32(&self) -> u32 {
        let mut r = lock(&self.state);
        let t = r[0] ^ (((r[0] as i32) >> 7) as u32);
        r.copy_within(1.., 0);
        r[4] = (r[4] ^ (r[4] << 6)) ^ (t ^ (t << 13));
        r[1].wrapping_add(r[1]).wrapping_add(1).wrapping_mul(r[4])
    }
}

impl_seed_identity!(XorShiftRng, Algorithm::XorShift);
