//! AES in counter mode as a seedable, reseedable generator.

use std::sync::Mutex;

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{lock, Algorithm};
use crate::error::RngError;
use crate::seed::{DefaultSeedSource, SeedSource};
use crate::source::{RandomSource, RepeatableRng, Reseed, RngCoreAdapter};

const BLOCK_LENGTH: usize = 16;
const COUNTER_LENGTH: usize = 16;
/// Blocks encrypted per cipher invocation.
const BLOCKS_AT_ONCE: usize = 16;
const CACHE_LENGTH: usize = BLOCK_LENGTH * BLOCKS_AT_ONCE;
const VALID_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Key schedule for whichever AES variant the key length selects.
enum CipherKey {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl CipherKey {
    fn new(key: &[u8]) -> Result<Self, RngError> {
        let unsupported =
            |_| RngError::RuntimeEnvironment(format!("AES rejected a {}-byte key", key.len()));
        match key.len() {
            16 => Aes128::new_from_slice(key).map(Self::Aes128).map_err(unsupported),
            24 => Aes192::new_from_slice(key).map(Self::Aes192).map_err(unsupported),
            32 => Aes256::new_from_slice(key).map(Self::Aes256).map_err(unsupported),
            other => Err(RngError::RuntimeEnvironment(format!(
                "AES does not support {}-byte keys",
                other
            ))),
        }
    }

    fn encrypt_in_place(&self, data: &mut [u8; CACHE_LENGTH]) {
        let mut blocks = [aes::Block::default(); BLOCKS_AT_ONCE];
        for (block, chunk) in blocks.iter_mut().zip(data.chunks_exact(BLOCK_LENGTH)) {
            block.copy_from_slice(chunk);
        }
        match self {
            Self::Aes128(cipher) => cipher.encrypt_blocks(&mut blocks),
            Self::Aes192(cipher) => cipher.encrypt_blocks(&mut blocks),
            Self::Aes256(cipher) => cipher.encrypt_blocks(&mut blocks),
        }
        for (chunk, block) in data.chunks_exact_mut(BLOCK_LENGTH).zip(&blocks) {
            chunk.copy_from_slice(block);
        }
    }
}

struct CounterState {
    cipher: CipherKey,
    key: Vec<u8>,
    counter: [u8; COUNTER_LENGTH],
    cache: [u8; CACHE_LENGTH],
    index: usize,
}

impl CounterState {
    /// Adds one to the counter, byte 0 least significant.
    fn increment_counter(&mut self) {
        for byte in self.counter.iter_mut() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    fn refill(&mut self) {
        for block in 0..BLOCKS_AT_ONCE {
            self.increment_counter();
            let start = block * BLOCK_LENGTH;
            self.cache[start..start + BLOCK_LENGTH].copy_from_slice(&self.counter);
        }
        self.cipher.encrypt_in_place(&mut self.cache);
        self.index = 0;
    }

    fn next_word(&mut self) -> u32 {
        if CACHE_LENGTH - self.index < 4 {
            self.refill();
        }
        let i = self.index;
        self.index += 4;
        u32::from_be_bytes([
            self.cache[i],
            self.cache[i + 1],
            self.cache[i + 2],
            self.cache[i + 3],
        ])
    }
}

/// Key length implied by a seed of `seed_length` bytes.
///
/// Seeds longer than the largest AES key carry 16 trailing counter bytes.
fn key_length(seed_length: usize) -> Result<usize, RngError> {
    let key_length = if seed_length > AesCounterRng::MAX_KEY_LENGTH_BYTES {
        seed_length - COUNTER_LENGTH
    } else {
        seed_length
    };
    if key_length > AesCounterRng::MAX_KEY_LENGTH_BYTES {
        return Err(RngError::RuntimeEnvironment(format!(
            "{}-byte key exceeds the {}-byte maximum supported by AES",
            key_length,
            AesCounterRng::MAX_KEY_LENGTH_BYTES
        )));
    }
    if !VALID_KEY_LENGTHS.contains(&key_length) {
        return Err(RngError::seed_length(
            Algorithm::AesCounter.name(),
            "16, 24, 32, 40 or 48",
            seed_length,
        ));
    }
    Ok(key_length)
}

/// AES block cipher in counter mode.
///
/// A 16, 24 or 32-byte seed becomes the AES-128/192/256 key with the counter
/// starting at zero. A 40 or 48-byte seed is split: the trailing 16 bytes
/// seed the counter directly and the rest is the key, which extends the
/// effective period instead of lengthening the key beyond what AES accepts.
///
/// Sixteen counter blocks are encrypted per refill and the ciphertext is
/// served four bytes at a time, big-endian.
///
/// This is the only engine suitable where unpredictability matters, and the
/// only one implementing [`Reseed`].
///
/// # Examples
///
/// ```
/// use maths_random::{AesCounterRng, RandomSource, RepeatableRng, Reseed};
///
/// let seed: Vec<u8> = (1..=16).collect();
/// let rng = AesCounterRng::from_seed(&seed).unwrap();
/// assert_eq!(rng.next_u32(), 0x4522_A03D);
///
/// rng.reseed(42).unwrap();
/// assert_ne!(rng.seed(), seed);
/// ```
pub struct AesCounterRng {
    counter_seed: Option<[u8; COUNTER_LENGTH]>,
    state: Mutex<CounterState>,
}

impl AesCounterRng {
    /// Longest key AES accepts.
    pub const MAX_KEY_LENGTH_BYTES: usize = 32;

    /// Seed size used when none is specified (an AES-256 key).
    pub const DEFAULT_SEED_SIZE_BYTES: usize = 32;

    /// Creates a generator with a 32-byte seed from the [`DefaultSeedSource`].
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if no seed could be obtained.
    pub fn new() -> Result<Self, RngError> {
        Self::from_seed_source(&DefaultSeedSource)
    }

    /// Creates a generator with a 32-byte seed drawn from `source`.
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if the source fails.
    pub fn from_seed_source(source: &dyn SeedSource) -> Result<Self, RngError> {
        Self::with_seed_size(source, Self::DEFAULT_SEED_SIZE_BYTES)
    }

    /// Creates a generator with `seed_size` bytes drawn from `source`.
    ///
    /// The size is validated before anything is drawn from the source.
    ///
    /// # Errors
    ///
    /// - [`RngError::RuntimeEnvironment`] if the implied key is longer than
    ///   [`MAX_KEY_LENGTH_BYTES`](Self::MAX_KEY_LENGTH_BYTES)
    /// - [`RngError::InvalidSeed`] for any other unsupported size
    /// - [`RngError::SeedUnavailable`] if the source fails
    pub fn with_seed_size(source: &dyn SeedSource, seed_size: usize) -> Result<Self, RngError> {
        key_length(seed_size)?;
        Self::from_seed(&source.generate_seed(seed_size)?)
    }

    /// Creates a generator from an explicit seed of 16, 24, 32, 40 or 48 bytes.
    ///
    /// # Errors
    ///
    /// - [`RngError::InvalidSeed`] for an absent or unsupported-length seed
    /// - [`RngError::RuntimeEnvironment`] if the implied key is longer than
    ///   the cipher supports
    pub fn from_seed(seed: &[u8]) -> Result<Self, RngError> {
        let (key, counter_part) = seed.split_at(key_length(seed.len())?);
        let cipher = CipherKey::new(key)?;
        let mut counter = [0u8; COUNTER_LENGTH];
        let counter_seed = if counter_part.is_empty() {
            None
        } else {
            counter.copy_from_slice(counter_part);
            Some(counter)
        };
        debug!(
            algorithm = %Algorithm::AesCounter,
            seed_length = seed.len(),
            key_length = key.len(),
            "generator constructed"
        );
        Ok(Self {
            counter_seed,
            state: Mutex::new(CounterState {
                cipher,
                key: key.to_vec(),
                counter,
                cache: [0; CACHE_LENGTH],
                index: CACHE_LENGTH,
            }),
        })
    }
}

impl RandomSource for AesCounterRng {
    fn next_u32(&self) -> u32 {
        lock(&self.state).next_word()
    }
}

impl RepeatableRng for AesCounterRng {
    /// The current key followed by the counter seed, if one was supplied.
    ///
    /// After [`Reseed::reseed`] this reflects the derived key.
    fn seed(&self) -> Vec<u8> {
        let mut seed = lock(&self.state).key.clone();
        if let Some(counter) = &self.counter_seed {
            seed.extend_from_slice(counter);
        }
        seed
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::AesCounter
    }
}

impl Reseed for AesCounterRng {
    /// Replaces the key with `SHA-256(key || input)` truncated to the key
    /// length.
    ///
    /// The counter keeps its position and cached output produced under the
    /// old key is discarded.
    fn reseed(&self, input: u64) -> Result<(), RngError> {
        let mut state = lock(&self.state);
        let digest = Sha256::new()
            .chain_update(&state.key)
            .chain_update(input.to_be_bytes())
            .finalize();
        let key = digest[..state.key.len()].to_vec();
        state.cipher = CipherKey::new(&key)?;
        state.key = key;
        state.index = CACHE_LENGTH;
        debug!(algorithm = %Algorithm::AesCounter, "generator reseeded");
        Ok(())
    }
}

impl PartialEq for AesCounterRng {
    fn eq(&self, other: &Self) -> bool {
        // Sequential locking; comparing an instance with itself must not deadlock.
        let mine = self.seed();
        mine == other.seed()
    }
}

impl Eq for AesCounterRng {}

impl std::hash::Hash for AesCounterRng {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.seed(), state);
    }
}

impl std::fmt::Debug for AesCounterRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCounterRng")
            .field("seed", &maths_core::binary::bytes_to_hex_string(&self.seed()))
            .finish_non_exhaustive()
    }
}

impl rand::CryptoRng for RngCoreAdapter<AesCounterRng> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FixedSeedSource;

    fn seed(length: u8) -> Vec<u8> {
        (1..=length).collect()
    }

    #[test]
    fn test_golden_values_aes128() {
        let rng = AesCounterRng::from_seed(&seed(16)).unwrap();
        let expected = [
            0x4522_A03D, 0x9800_9D55, 0x45ED_42FB, 0xD835_78D0, 0x1C81_0EE7,
            0x65E7_0B8F, 0x7AA3_2B03, 0x0507_F88A, 0x5FFE_1456, 0xD594_F922,
        ];
        for value in expected {
            assert_eq!(rng.next_u32(), value);
        }
    }

    #[test]
    fn test_golden_values_key_and_counter() {
        let rng = AesCounterRng::from_seed(&seed(48)).unwrap();
        let expected = [
            0x6F4E_DFFF, 0x0CFE_7521, 0x098F_82AB, 0x41C4_2ADB, 0xB47D_79C8,
            0x3DAC_1DFE, 0x6FD1_CFF1, 0xA395_2FBE, 0xA341_B659, 0x68F7_26C0,
        ];
        for value in expected {
            assert_eq!(rng.next_u32(), value);
        }
        assert_eq!(rng.seed(), seed(48));
    }

    #[test]
    fn test_supported_seed_lengths() {
        for length in [16, 24, 32, 40, 48] {
            let rng = AesCounterRng::from_seed(&vec![7u8; length]).unwrap();
            assert_eq!(rng.seed().len(), length);
        }
    }

    #[test]
    fn test_unsupported_seed_lengths() {
        for length in [0, 8, 17, 33, 41] {
            assert!(matches!(
                AesCounterRng::from_seed(&vec![7u8; length]),
                Err(RngError::InvalidSeed { .. })
            ));
        }
    }

    #[test]
    fn test_oversized_key_is_runtime_environment_error() {
        assert!(matches!(
            AesCounterRng::from_seed(&[7u8; 64]),
            Err(RngError::RuntimeEnvironment(_))
        ));
        // Rejected before the seed source is consulted.
        let empty = FixedSeedSource::new(Vec::new());
        assert!(matches!(
            AesCounterRng::with_seed_size(&empty, 64),
            Err(RngError::RuntimeEnvironment(_))
        ));
    }

    #[test]
    fn test_counter_carries_into_next_byte() {
        let rng = AesCounterRng::from_seed(&seed(16)).unwrap();
        let mut state = lock(&rng.state);
        state.counter = [0xFF, 0xFF, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        state.increment_counter();
        assert_eq!(state.counter[..3], [0x00, 0x00, 0x02]);
    }

    #[test]
    fn test_refill_every_sixty_four_words() {
        let rng = AesCounterRng::from_seed(&seed(16)).unwrap();
        for _ in 0..64 {
            rng.next_u32();
        }
        assert_eq!(lock(&rng.state).counter[0], 16);
        rng.next_u32();
        assert_eq!(lock(&rng.state).counter[0], 32);
    }

    #[test]
    fn test_batched_refill_matches_single_block_encryption() {
        let rng = AesCounterRng::from_seed(&seed(16)).unwrap();
        let cipher = Aes128::new_from_slice(&seed(16)).unwrap();
        // Two full refills: counter values 1..=32 in byte 0.
        for counter in 1..=(2 * BLOCKS_AT_ONCE as u8) {
            let mut block = aes::Block::default();
            block[0] = counter;
            cipher.encrypt_block(&mut block);
            for word in block.chunks_exact(4) {
                let expected = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
                assert_eq!(rng.next_u32(), expected, "counter block {}", counter);
            }
        }
    }

    #[test]
    fn test_reseed_is_deterministic() {
        let a = AesCounterRng::from_seed(&seed(16)).unwrap();
        let b = AesCounterRng::from_seed(&seed(16)).unwrap();
        a.next_u32();
        b.next_u32();
        a.reseed(0xDEAD_BEEF).unwrap();
        b.reseed(0xDEAD_BEEF).unwrap();
        assert_eq!(a, b);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_reseed_changes_key_and_discards_cache() {
        let reseeded = AesCounterRng::from_seed(&seed(16)).unwrap();
        let untouched = AesCounterRng::from_seed(&seed(16)).unwrap();
        reseeded.next_u32();
        untouched.next_u32();
        reseeded.reseed(1).unwrap();
        assert_ne!(reseeded.seed(), seed(16));
        assert_eq!(reseeded.seed().len(), 16);
        assert_ne!(reseeded.next_u32(), untouched.next_u32());
    }

    #[test]
    fn test_reseed_keeps_counter_position() {
        let reseeded = AesCounterRng::from_seed(&seed(16)).unwrap();
        reseeded.next_u32();
        reseeded.reseed(99).unwrap();

        // Same key, counter from zero: its second block of output uses the
        // counters the reseeded generator continues from.
        let replay = AesCounterRng::from_seed(&reseeded.seed()).unwrap();
        for _ in 0..64 {
            replay.next_u32();
        }
        for _ in 0..64 {
            assert_eq!(reseeded.next_u32(), replay.next_u32());
        }
    }

    #[test]
    fn test_reseed_preserves_counter_seed() {
        let rng = AesCounterRng::from_seed(&seed(40)).unwrap();
        rng.reseed(5).unwrap();
        let after = rng.seed();
        assert_eq!(after.len(), 40);
        assert_eq!(after[24..], seed(40)[24..]);
        assert_ne!(after[..24], seed(40)[..24]);
    }

    #[test]
    fn test_equality_with_self_does_not_deadlock() {
        let rng = AesCounterRng::from_seed(&seed(32)).unwrap();
        assert_eq!(rng, rng);
    }
}
