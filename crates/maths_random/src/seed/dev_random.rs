use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::SeedSource;
use crate::error::RngError;

const DEV_RANDOM: &str = "/dev/random";

/// Reads seed bytes from `/dev/random`.
///
/// Only available on Unix-like systems; elsewhere every request fails with
/// [`RngError::SeedUnavailable`]. Reads may block until the kernel has
/// gathered enough entropy.
#[derive(Debug, Clone)]
pub struct DevRandomSeedSource {
    path: PathBuf,
}

impl Default for DevRandomSeedSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEV_RANDOM),
        }
    }
}

impl DevRandomSeedSource {
    /// Source reading from `/dev/random`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source reading from an alternative device or file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for DevRandomSeedSource {
    fn generate_seed(&self, length: usize) -> Result<Vec<u8>, RngError> {
        let unavailable =
            |err: std::io::Error| RngError::SeedUnavailable(format!("{}: {}", self.path.display(), err));
        let mut file = File::open(&self.path).map_err(unavailable)?;
        let mut seed = vec![0u8; length];
        file.read_exact(&mut seed).map_err(unavailable)?;
        Ok(seed)
    }
}

impl std::fmt::Display for DevRandomSeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
