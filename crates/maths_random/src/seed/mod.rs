//! # Seed Sources
//!
//! Strategies for obtaining the raw bytes generators are seeded from.
//!
//! - [`DevRandomSeedSource`]: the kernel entropy pool via `/dev/random`
//! - [`OsSeedSource`]: the operating system CSPRNG (`rand::rngs::OsRng`)
//! - [`DefaultSeedSource`]: tries each of the above in turn
//! - [`FixedSeedSource`]: replays caller-supplied bytes, for tests and for
//!   seeds given on the command line
//!
//! Sources never retry internally; a failure is reported as
//! [`RngError::SeedUnavailable`] and any retry policy belongs to the caller.

mod default;
mod dev_random;
mod fixed;
mod os;

pub use default::DefaultSeedSource;
pub use dev_random::DevRandomSeedSource;
pub use fixed::FixedSeedSource;
pub use os::OsSeedSource;

use crate::error::RngError;

/// Supplier of seed bytes.
pub trait SeedSource: Send + Sync {
    /// Produces exactly `length` seed bytes.
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] on I/O failure or access restrictions.
    fn generate_seed(&self, length: usize) -> Result<Vec<u8>, RngError>;
}
