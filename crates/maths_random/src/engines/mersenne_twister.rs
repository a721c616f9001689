//! MT19937 twisted generalised feedback shift register.

use std::sync::Mutex;

use tracing::debug;

use super::{impl_seed_identity, lock, Algorithm};
use crate::error::RngError;
use crate::seed::{DefaultSeedSource, SeedSource};
use crate::source::RandomSource;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const MAG01: [u32; 2] = [0, MATRIX_A];

const BOOTSTRAP_SEED: u32 = 19_650_218;
const SEED_FACTOR1: u32 = 1_812_433_253;
const SEED_FACTOR2: u32 = 1_664_525;
const SEED_FACTOR3: u32 = 1_566_083_941;

const GENERATE_MASK1: u32 = 0x9D2C_5680;
const GENERATE_MASK2: u32 = 0xEFC6_0000;

struct TwisterState {
    mt: [u32; N],
    index: usize,
}

impl TwisterState {
    /// Reference `init_by_array` expansion of the key words.
    fn from_key(key: &[u32]) -> Self {
        let mut mt = [0u32; N];
        mt[0] = BOOTSTRAP_SEED;
        for i in 1..N {
            mt[i] = SEED_FACTOR1
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 30))
                .wrapping_add(i as u32);
        }

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(SEED_FACTOR2))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(SEED_FACTOR3))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        // Guarantees a non-zero initial array.
        mt[0] = UPPER_MASK;

        Self { mt, index: N }
    }

    fn twist(&mut self) {
        let mt = &mut self.mt;
        for kk in 0..N - M {
            let y = (mt[kk] & UPPER_MASK) | (mt[kk + 1] & LOWER_MASK);
            mt[kk] = mt[kk + M] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
        for kk in N - M..N - 1 {
            let y = (mt[kk] & UPPER_MASK) | (mt[kk + 1] & LOWER_MASK);
            mt[kk] = mt[kk + M - N] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
        let y = (mt[N - 1] & UPPER_MASK) | (mt[0] & LOWER_MASK);
        mt[N - 1] = mt[M - 1] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        self.index = 0;
    }

    fn next_tempered(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.mt[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & GENERATE_MASK1;
        y ^= (y << 15) & GENERATE_MASK2;
        y ^ (y >> 18)
    }
}

/// The Mersenne Twister (MT19937), period 2^19937 - 1.
///
/// The 624-word state is expanded from four big-endian key words by the
/// reference `init_by_array` routine rather than copied from the seed, and
/// the whole array is twisted once every 624 draws. Each output is tempered.
///
/// # Examples
///
/// ```
/// use maths_random::{MersenneTwisterRng, RandomSource};
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let rng = MersenneTwisterRng::from_seed(&seed).unwrap();
/// assert_eq!(rng.next_u32(), 0x734C_50E4);
/// ```
pub struct MersenneTwisterRng {
    seed: [u8; MersenneTwisterRng::SEED_SIZE_BYTES],
    state: Mutex<Box<TwisterState>>,
}

impl MersenneTwisterRng {
    /// Exact seed length.
    pub const SEED_SIZE_BYTES: usize = 16;

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

    /// Creates a generator from an explicit 16-byte seed.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] unless the seed is exactly 16 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, RngError> {
        let seed: [u8; Self::SEED_SIZE_BYTES] = seed.try_into().map_err(|_| {
            RngError::seed_length(Algorithm::MersenneTwister.name(), "16", seed.len())
        })?;
        let key: Vec<u32> = seed
            .chunks_exact(4)
            .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
            .collect();
        debug!(algorithm = %Algorithm::MersenneTwister, seed_length = seed.len(), "generator constructed");
        Ok(Self {
            seed,
            state: Mutex::new(Box::new(TwisterState::from_key(&key))),
        })
    }
}

impl RandomSource for MersenneTwisterRng {
    fn next_u32(&self) -> u32 {
        lock(&self.state).next_tempered()
    }
}

impl_seed_identity!(MersenneTwisterRng, Algorithm::MersenneTwister);
