//! Algorithms command implementation
//!
//! Lists the generator registry.

use std::io::Write;

use maths_random::Algorithm;

use crate::Result;

/// Run the algorithms command
pub fn run() -> Result<()> {
    write_listing(&mut std::io::stdout().lock())
}

/// Writes one line per registered algorithm: identifier, default seed size
/// and description.
pub fn write_listing<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<20} {:>10}  {}", "ALGORITHM", "SEED BYTES", "DESCRIPTION")?;
    for algorithm in Algorithm::ALL {
        writeln!(
            out,
            "{:<20} {:>10}  {}",
            algorithm.name(),
            algorithm.default_seed_size(),
            algorithm.description()
        )?;
    }
    Ok(())
}
