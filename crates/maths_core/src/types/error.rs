//! Error types for structured error handling.
//!
//! This module provides:
//! - `BinaryError`: Errors from byte, hex and bit-string conversions
//! - `StatisticsError`: Errors from descriptive statistics
//! - `CombinatoricsError`: Errors from combination and permutation generators
//! - `RationalError`: Errors from exact fraction arithmetic

use thiserror::Error;

/// Binary conversion errors.
///
/// Raised by the conversion helpers in [`crate::binary`] when their input
/// cannot be represented in the requested form.
///
/// # Examples
/// ```
/// use maths_core::types::BinaryError;
///
/// let err = BinaryError::InvalidHexLength { length: 3 };
/// assert!(format!("{}", err).contains("even number"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinaryError {
    /// Hex string does not contain two digits per byte.
    #[error("Hex string must have an even number of characters, got {length}")]
    InvalidHexLength {
        /// Number of characters supplied
        length: usize,
    },

    /// Character is not a hexadecimal digit.
    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit {
        /// The offending character
        digit: char,
        /// Character offset within the input
        position: usize,
    },

    /// Byte count is not a multiple of the target word size.
    #[error("Number of bytes must be a multiple of {word_size}, got {length}")]
    InvalidByteCount {
        /// Number of bytes supplied
        length: usize,
        /// Required word size in bytes
        word_size: usize,
    },

    /// Not enough bytes after the offset to assemble a word.
    #[error("Offset {offset} leaves fewer than {required} bytes in a buffer of {length}")]
    OffsetOutOfBounds {
        /// Requested start offset
        offset: usize,
        /// Bytes needed from the offset
        required: usize,
        /// Buffer length
        length: usize,
    },

    /// Value cannot be encoded as a fixed-point fraction.
    #[error("Fixed-point value must be in [0, 1), got {value}")]
    FixedPointOutOfRange {
        /// The value that was rejected
        value: f64,
    },

    /// Bit string contains something other than '0' or '1'.
    #[error("Invalid bit character {character:?} at position {position}")]
    InvalidBitCharacter {
        /// The offending character
        character: char,
        /// Character offset within the input
        position: usize,
    },
}

/// Descriptive statistics errors.
///
/// # Examples
/// ```
/// use maths_core::types::StatisticsError;
///
/// let err = StatisticsError::EmptyDataSet;
/// assert_eq!(format!("{}", err), "Data set is empty: no values have been added");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
    /// A statistic was requested before any value was recorded.
    #[error("Data set is empty: no values have been added")]
    EmptyDataSet,

    /// The statistic needs more values than have been recorded.
    #[error("Insufficient data: got {actual} values, need at least {required}")]
    InsufficientData {
        /// Number of values recorded
        actual: usize,
        /// Minimum number of values required
        required: usize,
    },
}

/// Combinatorics errors.
///
/// # Examples
/// ```
/// use maths_core::types::CombinatoricsError;
///
/// let err = CombinatoricsError::ExhaustedSequence;
/// assert!(format!("{}", err).contains("reset"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// All arrangements have been produced; the generator must be reset.
    #[error("No arrangements remaining: the generator must be reset to continue")]
    ExhaustedSequence,

    /// Requested combination length exceeds the number of elements.
    #[error("Combination length {length} exceeds set size {size}")]
    LengthExceedsSetSize {
        /// Requested combination length
        length: usize,
        /// Number of elements available
        size: usize,
    },

    /// Set is too large for the arrangement count to fit in 64 bits.
    #[error("Set size {size} exceeds the maximum of {max}")]
    SetTooLarge {
        /// Number of elements supplied
        size: usize,
        /// Largest supported set
        max: usize,
    },

    /// Caller-supplied buffer does not match the arrangement length.
    #[error("Destination length {actual} does not match arrangement length {expected}")]
    DestinationLengthMismatch {
        /// Arrangement length
        expected: usize,
        /// Buffer length supplied
        actual: usize,
    },
}

/// Rational arithmetic errors.
///
/// # Examples
/// ```
/// use maths_core::types::RationalError;
///
/// let err = RationalError::NonPositiveDenominator { denominator: 0 };
/// assert!(format!("{}", err).contains("positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// Denominator is zero or negative.
    #[error("Denominator must be positive, got {denominator}")]
    NonPositiveDenominator {
        /// The rejected denominator
        denominator: i64,
    },

    /// Division by a zero-valued rational.
    #[error("Division by zero")]
    DivisionByZero,

    /// Normalised numerator or denominator does not fit in 64 bits.
    #[error("Rational {operation} overflows 64-bit numerator or denominator")]
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Text is neither an integer, a decimal nor an `n/d` fraction.
    #[error("Invalid rational {input:?}")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },
}
