//! # maths_random: Seedable Random Number Generators and Samplers
//!
//! ## Engine Layer Role
//!
//! maths_random sits on top of maths_core, providing:
//! - The generator capability traits: `RandomSource`, `RepeatableRng`, `Reseed` (`source`)
//! - Five deterministic engines and their registry: `Algorithm` (`engines`)
//! - Generator snapshots for freeze/thaw: `FrozenRng` (`engines`)
//! - Seed sources: `/dev/random`, the OS CSPRNG and fixed bytes (`seed`)
//! - Non-uniform samplers with live parameters (`distributions`)
//! - A bridge into the `rand` ecosystem: `RngCoreAdapter` (`source`)
//!
//! Every generator is `Send + Sync`: state lives behind a per-instance
//! mutex, so a single generator can be shared across threads and each draw
//! is atomic with respect to the others.
//!
//! ## Usage Examples
//!
//! ```rust
//! use maths_random::distributions::{GaussianGenerator, NumberGenerator};
//! use maths_random::{AesCounterRng, RandomSource, RepeatableRng, Reseed};
//!
//! // Identical seeds give identical streams
//! let seed: Vec<u8> = (1..=16).collect();
//! let a = AesCounterRng::from_seed(&seed).unwrap();
//! let b = AesCounterRng::from_seed(&a.seed()).unwrap();
//! assert_eq!(a.next_u64(), b.next_u64());
//!
//! // Reseeding mixes new input into the key
//! a.reseed(42).unwrap();
//! assert_ne!(a.seed(), seed);
//!
//! // Samplers borrow or own any generator
//! let gaussian = GaussianGenerator::new(147.0, 17.0, &b).unwrap();
//! assert!(gaussian.next_value().unwrap().is_finite());
//! ```
//!
//! ## Interoperability
//!
//! [`RngCoreAdapter`] wraps any engine as a `rand::RngCore`, so the engines
//! drive `rand` and `rand_distr` samplers directly.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod engines;
pub mod error;
pub mod seed;
pub mod source;

pub use engines::{
    AesCounterRng, Algorithm, CellularAutomatonRng, Cmwc4096Rng, FrozenRng, MersenneTwisterRng,
    XorShiftRng,
};
pub use error::RngError;
pub use source::{RandomSource, RepeatableRng, Reseed, RngCoreAdapter};
