//! # Pseudo-Random Number Engines
//!
//! Five interchangeable generators, each constructed from a fixed-size seed
//! and producing a deterministic stream of 32-bit words:
//!
//! | Engine | Seed | Notes |
//! |---|---|---|
//! | [`AesCounterRng`] | 16, 24, 32, 40 or 48 bytes | AES in counter mode, 16 blocks per refill; reseedable |
//! | [`CellularAutomatonRng`] | 16 bytes | 16x16 toroidal automaton, one generation per 16 words |
//! | [`Cmwc4096Rng`] | 16384 bytes | complementary multiply-with-carry, lag 4096 |
//! | [`MersenneTwisterRng`] | 16 bytes | MT19937 seeded through `init_by_array` |
//! | [`XorShiftRng`] | 20 bytes | Marsaglia's five-register xorshift; fastest, shortest period |
//!
//! Each engine keeps its working state behind its own mutex and exposes only
//! its seed. Duplicating a generator means constructing a new one from that
//! seed, either directly or through [`Algorithm::create`] and [`FrozenRng`].
//!
//! ## Usage Example
//!
//! ```rust
//! use maths_random::engines::Algorithm;
//! use maths_random::RandomSource;
//!
//! let algorithm: Algorithm = "xor-shift".parse().unwrap();
//! let seed: Vec<u8> = (1..=20).collect();
//! let first = algorithm.create(&seed).unwrap();
//! let second = algorithm.create(&first.seed()).unwrap();
//! assert_eq!(first.next_u32(), second.next_u32());
//! ```

mod aes_counter;
mod cellular_automaton;
mod cmwc;
mod frozen;
mod mersenne_twister;
mod xor_shift;

pub use aes_counter::AesCounterRng;
pub use cellular_automaton::CellularAutomatonRng;
pub use cmwc::Cmwc4096Rng;
pub use frozen::FrozenRng;
pub use mersenne_twister::MersenneTwisterRng;
pub use xor_shift::XorShiftRng;

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::seed::SeedSource;
use crate::source::RepeatableRng;

/// Registry of the available generators.
///
/// Maps the stable string identifiers used on the command line and in
/// frozen generators to constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// [`AesCounterRng`]
    #[serde(rename = "aes-counter")]
    AesCounter,
    /// [`CellularAutomatonRng`]
    #[serde(rename = "cellular-automaton")]
    CellularAutomaton,
    /// [`Cmwc4096Rng`]
    #[serde(rename = "cmwc4096")]
    Cmwc4096,
    /// [`MersenneTwisterRng`]
    #[serde(rename = "mersenne-twister")]
    MersenneTwister,
    /// [`XorShiftRng`]
    #[serde(rename = "xor-shift")]
    XorShift,
}

impl Algorithm {
    /// Every registered algorithm, in identifier order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AesCounter,
        Algorithm::CellularAutomaton,
        Algorithm::Cmwc4096,
        Algorithm::MersenneTwister,
        Algorithm::XorShift,
    ];

    /// Stable string identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AesCounter => "aes-counter",
            Algorithm::CellularAutomaton => "cellular-automaton",
            Algorithm::Cmwc4096 => "cmwc4096",
            Algorithm::MersenneTwister => "mersenne-twister",
            Algorithm::XorShift => "xor-shift",
        }
    }

    /// Number of seed bytes requested when seeding from a [`SeedSource`].
    pub const fn default_seed_size(self) -> usize {
        match self {
            Algorithm::AesCounter => AesCounterRng::DEFAULT_SEED_SIZE_BYTES,
            Algorithm::CellularAutomaton => CellularAutomatonRng::SEED_SIZE_BYTES,
            Algorithm::Cmwc4096 => Cmwc4096Rng::SEED_SIZE_BYTES,
            Algorithm::MersenneTwister => MersenneTwisterRng::SEED_SIZE_BYTES,
            Algorithm::XorShift => XorShiftRng::SEED_SIZE_BYTES,
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::AesCounter => "AES block cipher in counter mode",
            Algorithm::CellularAutomaton => "16x16 toroidal cellular automaton",
            Algorithm::Cmwc4096 => "complementary multiply-with-carry, lag 4096",
            Algorithm::MersenneTwister => "MT19937 twisted feedback shift register",
            Algorithm::XorShift => "five-register xorshift",
        }
    }

    /// Constructs the generator from an explicit seed.
    ///
    /// # Errors
    ///
    /// Whatever the engine's own `from_seed` reports, typically
    /// [`RngError::InvalidSeed`].
    pub fn create(self, seed: &[u8]) -> Result<Box<dyn RepeatableRng>, RngError> {
        Ok(match self {
            Algorithm::AesCounter => Box::new(AesCounterRng::from_seed(seed)?),
            Algorithm::CellularAutomaton => Box::new(CellularAutomatonRng::from_seed(seed)?),
            Algorithm::Cmwc4096 => Box::new(Cmwc4096Rng::from_seed(seed)?),
            Algorithm::MersenneTwister => Box::new(MersenneTwisterRng::from_seed(seed)?),
            Algorithm::XorShift => Box::new(XorShiftRng::from_seed(seed)?),
        })
    }

    /// Constructs the generator with [`default_seed_size`](Self::default_seed_size)
    /// bytes drawn from `source`.
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if the source fails.
    pub fn create_from_source(
        self,
        source: &dyn SeedSource,
    ) -> Result<Box<dyn RepeatableRng>, RngError> {
        let seed = source.generate_seed(self.default_seed_size())?;
        self.create(&seed)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RngError::UnknownAlgorithm(s.to_string()))
    }
}

/// Locks an engine's working state.
///
/// Engine steps never panic part-way through an update, so a poisoned lock
/// still guards consistent state and is recovered rather than propagated.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Identity and [`RepeatableRng`] impls for engines with an immutable seed.
macro_rules! impl_seed_identity {
    ($engine:ident, $algorithm:expr) => {
        impl PartialEq for $engine {
            fn eq(&self, other: &Self) -> bool {
                self.seed == other.seed
            }
        }

        impl Eq for $engine {}

        impl std::hash::Hash for $engine {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.seed, state);
            }
        }

        impl std::fmt::Debug for $engine {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($engine))
                    .field("seed", &maths_core::binary::bytes_to_hex_string(&self.seed))
                    .finish_non_exhaustive()
            }
        }

        impl $crate::source::RepeatableRng for $engine {
            fn seed(&self) -> Vec<u8> {
                self.seed.to_vec()
            }

            fn algorithm(&self) -> $crate::engines::Algorithm {
                $algorithm
            }
        }
    };
}

pub(crate) use impl_seed_identity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FixedSeedSource;

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Mersenne-Twister".parse::<Algorithm>().unwrap(),
            Algorithm::MersenneTwister
        );
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(
            "linear-congruential".parse::<Algorithm>(),
            Err(RngError::UnknownAlgorithm("linear-congruential".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_registry() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
        }
    }

    #[test]
    fn test_create_from_source_uses_default_seed_size() {
        for algorithm in Algorithm::ALL {
            let bytes: Vec<u8> = (0..algorithm.default_seed_size())
                .map(|i| (i * 31 + 7) as u8)
                .collect();
            let source = FixedSeedSource::new(bytes.clone());
            let rng = algorithm.create_from_source(&source).unwrap();
            assert_eq!(rng.algorithm(), algorithm);
            assert_eq!(rng.seed(), bytes);
        }
    }

    #[test]
    fn test_create_rejects_wrong_seed() {
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                algorithm.create(&[1, 2, 3]),
                Err(RngError::InvalidSeed { .. })
            ));
        }
    }
}
