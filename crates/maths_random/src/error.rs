//! Error type for generator construction, seeding and sampling.

use thiserror::Error;

/// Errors raised by generators, seed sources and distribution samplers.
///
/// All variants are surfaced to the immediate caller; nothing in this crate
/// retries or logs-and-continues.
///
/// # Examples
/// ```
/// use maths_random::RngError;
///
/// let err = RngError::InvalidSeed {
///     algorithm: "xor-shift",
///     reason: "expected 20 bytes, got 4".to_string(),
/// };
/// assert!(format!("{}", err).contains("xor-shift"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RngError {
    /// Seed absent, of the wrong length or otherwise malformed.
    #[error("Invalid seed for {algorithm}: {reason}")]
    InvalidSeed {
        /// Registry identifier of the generator being constructed
        algorithm: &'static str,
        /// What was wrong with the seed
        reason: String,
    },

    /// The cipher primitive rejected the requested configuration.
    #[error("Runtime environment does not support the request: {0}")]
    RuntimeEnvironment(String),

    /// A seed source could not supply the requested bytes.
    #[error("Seed unavailable: {0}")]
    SeedUnavailable(String),

    /// A distribution parameter is outside its domain.
    #[error("Invalid parameter {name} = {value}: must be {constraint}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, rendered for display
        value: String,
        /// Human-readable domain constraint
        constraint: &'static str,
    },

    /// No generator is registered under the given identifier.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl RngError {
    /// Convenience constructor for [`RngError::InvalidParameter`].
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            constraint,
        }
    }

    /// Convenience constructor for a wrong-length [`RngError::InvalidSeed`].
    pub(crate) fn seed_length(algorithm: &'static str, expected: &str, actual: usize) -> Self {
        let reason = if actual == 0 {
            "seed is absent".to_string()
        } else {
            format!("expected {} bytes, got {}", expected, actual)
        };
        Self::InvalidSeed { algorithm, reason }
    }
}
