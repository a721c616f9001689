//! Serialisable snapshot of a generator's identity.

use maths_core::binary::{bytes_to_hex_string, hex_string_to_bytes};
use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::error::RngError;
use crate::source::RepeatableRng;

/// A generator reduced to its algorithm and seed.
///
/// Thawing reconstructs the generator at the *start* of its sequence; the
/// position reached by the frozen instance is deliberately not captured.
///
/// # Examples
///
/// ```
/// use maths_random::{FrozenRng, RandomSource, XorShiftRng};
///
/// let seed: Vec<u8> = (1..=20).collect();
/// let rng = XorShiftRng::from_seed(&seed).unwrap();
/// let first = rng.next_u32();
///
/// let frozen = FrozenRng::freeze(&rng);
/// assert_eq!(frozen.seed_hex, "0102030405060708090A0B0C0D0E0F1011121314");
///
/// let thawed = frozen.thaw().unwrap();
/// assert_eq!(thawed.next_u32(), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrozenRng {
    /// Registry identifier.
    pub algorithm: Algorithm,
    /// Seed as an uppercase hex string.
    pub seed_hex: String,
}

impl FrozenRng {
    /// Captures the algorithm and current seed of `rng`.
    pub fn freeze(rng: &dyn RepeatableRng) -> Self {
        Self {
            algorithm: rng.algorithm(),
            seed_hex: bytes_to_hex_string(&rng.seed()),
        }
    }

    /// Decoded seed bytes.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] if `seed_hex` is not valid hex.
    pub fn seed(&self) -> Result<Vec<u8>, RngError> {
        hex_string_to_bytes(&self.seed_hex).map_err(|err| RngError::InvalidSeed {
            algorithm: self.algorithm.name(),
            reason: err.to_string(),
        })
    }

    /// Reconstructs a fresh generator from the stored seed.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] if the seed is malformed or the wrong
    /// length for the algorithm.
    pub fn thaw(&self) -> Result<Box<dyn RepeatableRng>, RngError> {
        self.algorithm.create(&self.seed()?)
    }
}
