use tracing::warn;

use super::{DevRandomSeedSource, OsSeedSource, SeedSource};
use crate::error::RngError;

/// Tries `/dev/random`, then the operating system generator.
///
/// Each fallback is logged at `warn`. Fails only if every strategy fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSeedSource;

impl SeedSource for DefaultSeedSource {
    fn generate_seed(&self, length: usize) -> Result<Vec<u8>, RngError> {
        let dev_random = DevRandomSeedSource::new();
        match dev_random.generate_seed(length) {
            Ok(seed) => return Ok(seed),
            Err(err) => warn!(source = %dev_random, error = %err, "seed source failed, falling back"),
        }
        OsSeedSource.generate_seed(length).map_err(|err| {
            warn!(error = %err, "operating system seed source failed");
            RngError::SeedUnavailable(format!("no seed source could supply {} bytes", length))
        })
    }
}
