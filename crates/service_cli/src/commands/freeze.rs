//! Freeze and thaw command implementations
//!
//! `freeze` records a generator as JSON (algorithm plus seed); `thaw`
//! rebuilds it from such a record and prints the start of its sequence.

use std::io::Write;
use std::path::Path;

use maths_random::{FrozenRng, RandomSource};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

use super::build_generator;

/// Run the freeze command
pub fn run_freeze(config: &CliConfig, output: Option<&Path>) -> Result<()> {
    let frozen = freeze(config)?;
    let json = serde_json::to_string_pretty(&frozen)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            info!("Frozen {} written to {}", frozen.algorithm, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Run the thaw command
pub fn run_thaw(input: &Path, count: usize) -> Result<()> {
    let frozen: FrozenRng = serde_json::from_str(&std::fs::read_to_string(input)?)?;
    info!("Thawing {} from {}", frozen.algorithm, input.display());
    write_words(&frozen, count, &mut std::io::stdout().lock())
}

/// Builds the configured generator and reduces it to its frozen form.
pub fn freeze(config: &CliConfig) -> Result<FrozenRng> {
    let rng = build_generator(config)?;
    Ok(FrozenRng::freeze(rng.as_ref()))
}

/// Writes the first `count` 32-bit words of the thawed generator as hex,
/// one per line.
pub fn write_words<W: Write>(frozen: &FrozenRng, count: usize, out: &mut W) -> Result<()> {
    let rng = frozen.thaw()?;
    for _ in 0..count {
        writeln!(out, "{:08X}", rng.next_u32())?;
    }
    Ok(())
}
