use rand::rngs::OsRng;
use rand::RngCore;

use super::SeedSource;
use crate::error::RngError;

/// Seeds from the operating system's cryptographically secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn generate_seed(&self, length: usize) -> Result<Vec<u8>, RngError> {
        let mut seed = vec![0u8; length];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|err| RngError::SeedUnavailable(format!("operating system RNG: {}", err)))?;
        Ok(seed)
    }
}
