//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod algorithms;
pub mod feed;
pub mod freeze;
pub mod sample;

use maths_core::binary::bytes_to_hex_string;
use maths_random::seed::DefaultSeedSource;
use maths_random::RepeatableRng;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Builds the configured generator, from the explicit seed if one is set.
///
/// The seed actually used is logged so any run can be reproduced.
pub fn build_generator(config: &CliConfig) -> Result<Box<dyn RepeatableRng>> {
    let rng = match config.seed_bytes()? {
        Some(seed) => config.algorithm.create(&seed)?,
        None => config.algorithm.create_from_source(&DefaultSeedSource)?,
    };
    info!(
        algorithm = %config.algorithm,
        seed_hex = %bytes_to_hex_string(&rng.seed()),
        "generator ready"
    );
    Ok(rng)
}
