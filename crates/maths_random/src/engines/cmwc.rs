//! Complementary multiply-with-carry generator, lag 4096.

use std::sync::Mutex;

use tracing::debug;

use super::{impl_seed_identity, lock, Algorithm};
use crate::error::RngError;
use crate::seed::{DefaultSeedSource, SeedSource};
use crate::source::RandomSource;

const LAG: usize = 4096;
const MULTIPLIER: u64 = 18_782;
const INITIAL_CARRY: u32 = 362_436;

struct CarryState {
    lag: Box<[u32; LAG]>,
    carry: u32,
    index: usize,
}

impl CarryState {
    fn next_word(&mut self) -> u32 {
        self.index = (self.index + 1) & (LAG - 1);
        let t = MULTIPLIER * u64::from(self.lag[self.index]) + u64::from(self.carry);
        self.carry = (t >> 32) as u32;
        let mut x = (t as u32).wrapping_add(self.carry);
        if x < self.carry {
            x = x.wrapping_add(1);
            self.carry += 1;
        }
        self.lag[self.index] = 0xFFFF_FFFE_u32.wrapping_sub(x);
        self.lag[self.index]
    }
}

/// Marsaglia's complementary multiply-with-carry generator, period about
/// 2^131086.
///
/// The 4096-word lag table is loaded big-endian from a 16384-byte seed, so
/// seeding draws far more entropy than the other engines; construction from
/// a slow seed source such as `/dev/random` can take noticeably longer.
pub struct Cmwc4096Rng {
    seed: Box<[u8]>,
    state: Mutex<CarryState>,
}

impl Cmwc4096Rng {
    /// Exact seed length (4096 words).
    pub const SEED_SIZE_BYTES: usize = LAG * 4;

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

    /// Creates a generator from an explicit 16384-byte seed.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] unless the seed is exactly 16384 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, RngError> {
        if seed.len() != Self::SEED_SIZE_BYTES {
            return Err(RngError::seed_length(
                Algorithm::Cmwc4096.name(),
                "16384",
                seed.len(),
            ));
        }
        let mut lag = Box::new([0u32; LAG]);
        for (slot, word) in lag.iter_mut().zip(seed.chunks_exact(4)) {
            *slot = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        debug!(algorithm = %Algorithm::Cmwc4096, seed_length = seed.len(), "generator constructed");
        Ok(Self {
            seed: seed.into(),
            state: Mutex::new(CarryState {
                lag,
                carry: INITIAL_CARRY,
                index: LAG - 1,
            }),
        })
    }
}

impl RandomSource for Cmwc4096Rng {
    fn next_u32(&self) -> u32 {
        lock(&self.state).next_word()
    }
}

impl_seed_identity!(Cmwc4096Rng, Algorithm::Cmwc4096);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::MersenneTwisterRng;

    fn seed() -> Vec<u8> {
        let filler = MersenneTwisterRng::from_seed(&(1..=16).collect::<Vec<u8>>()).unwrap();
        let mut seed = vec![0u8; Cmwc4096Rng::SEED_SIZE_BYTES];
        filler.fill_bytes(&mut seed);
        seed
    }

    #[test]
    fn test_golden_values() {
        let rng = Cmwc4096Rng::from_seed(&seed()).unwrap();
        let expected = [
            0xE6E3_9F77, 0x91E7_9A30, 0x90FA_1109, 0xC0BF_8B4E, 0x827F_D6AF,
            0x678C_D3A5, 0x8DE2_7D97, 0xC346_2782, 0xA514_09F7, 0x08E0_5638,
        ];
        for value in expected {
            assert_eq!(rng.next_u32(), value);
        }
    }

    #[test]
    fn test_wraps_lag_table() {
        let seed = seed();
        let a = Cmwc4096Rng::from_seed(&seed).unwrap();
        let b = Cmwc4096Rng::from_seed(&seed).unwrap();
        for _ in 0..2 * LAG + 3 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_carry_overflow_path() {
        // 18782 * (2^32 - 1) + 1 leaves a low word that wraps when the carry is added.
        let mut state = CarryState {
            lag: Box::new([u32::MAX; LAG]),
            carry: 1,
            index: LAG - 1,
        };
        assert_eq!(state.next_word(), 0xFFFF_FFFD);
        assert_eq!(state.carry, 18_782);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_rejects_undersized_seed() {
        assert!(matches!(
            Cmwc4096Rng::from_seed(&[0; 16383]),
            Err(RngError::InvalidSeed { algorithm: "cmwc4096", .. })
        ));
        assert!(Cmwc4096Rng::from_seed(&[0; 16385]).is_err());
    }
}
