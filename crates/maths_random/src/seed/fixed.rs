use super::SeedSource;
use crate::error::RngError;

/// Replays a fixed byte string.
///
/// Every request returns the leading `length` bytes, so repeated requests
/// yield the same seed.
///
/// # Examples
///
/// ```
/// use maths_random::seed::{FixedSeedSource, SeedSource};
///
/// let source = FixedSeedSource::new(vec![1, 2, 3, 4]);
/// assert_eq!(source.generate_seed(2).unwrap(), vec![1, 2]);
/// assert!(source.generate_seed(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSeedSource {
    bytes: Vec<u8>,
}

impl FixedSeedSource {
    /// Source replaying `bytes`.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl SeedSource for FixedSeedSource {
    fn generate_seed(&self, length: usize) -> Result<Vec<u8>, RngError> {
        self.bytes
            .get(..length)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| {
                RngError::SeedUnavailable(format!(
                    "fixed seed holds {} bytes, {} requested",
                    self.bytes.len(),
                    length
                ))
            })
    }
}
