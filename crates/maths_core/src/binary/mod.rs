//! Byte, hex and fixed-point conversions.
//!
//! All multi-byte conversions use big-endian byte order. Bytes are always
//! treated as unsigned (0-255) before being combined, so values with the high
//! bit set never sign-extend into neighbouring bytes.
//!
//! ## Usage Example
//!
//! ```rust
//! use maths_core::binary::{bytes_to_hex_string, bytes_to_int, hex_string_to_bytes};
//!
//! let bytes = hex_string_to_bytes("08040201").unwrap();
//! assert_eq!(bytes_to_int(&bytes, 0).unwrap(), 134_480_385);
//! assert_eq!(bytes_to_hex_string(&bytes), "08040201");
//! ```

mod bit_string;

pub use bit_string::BitString;

use crate::types::BinaryError;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Renders bytes as an uppercase hex string, two digits per byte.
///
/// # Examples
///
/// ```
/// use maths_core::binary::bytes_to_hex_string;
///
/// assert_eq!(bytes_to_hex_string(&[0x7C, 0x0B, 0x00, 0xB4]), "7C0B00B4");
/// assert_eq!(bytes_to_hex_string(&[]), "");
/// ```
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    hex
}

/// Parses a hex string (either case) into bytes.
///
/// # Errors
///
/// - [`BinaryError::InvalidHexLength`] if the string has an odd length
/// - [`BinaryError::InvalidHexDigit`] if any character is not a hex digit
pub fn hex_string_to_bytes(hex: &str) -> Result<Vec<u8>, BinaryError> {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(BinaryError::InvalidHexLength {
            length: chars.len(),
        });
    }
    let digit = |position: usize| -> Result<u8, BinaryError> {
        let c = chars[position];
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or(BinaryError::InvalidHexDigit { digit: c, position })
    };
    (0..chars.len())
        .step_by(2)
        .map(|i| -> Result<u8, BinaryError> { Ok((digit(i)? << 4) | digit(i + 1)?) })
        .collect()
}

/// Reads a big-endian 32-bit integer starting at `offset`.
///
/// # Errors
///
/// [`BinaryError::OffsetOutOfBounds`] if fewer than four bytes remain.
pub fn bytes_to_int(bytes: &[u8], offset: usize) -> Result<i32, BinaryError> {
    let word = read_array::<4>(bytes, offset)?;
    Ok(i32::from_be_bytes(word))
}

/// Reads a big-endian 64-bit integer starting at `offset`.
///
/// # Errors
///
/// [`BinaryError::OffsetOutOfBounds`] if fewer than eight bytes remain.
pub fn bytes_to_long(bytes: &[u8], offset: usize) -> Result<i64, BinaryError> {
    let word = read_array::<8>(bytes, offset)?;
    Ok(i64::from_be_bytes(word))
}

/// Converts a byte slice into big-endian 32-bit integers.
///
/// # Errors
///
/// [`BinaryError::InvalidByteCount`] if the length is not a multiple of four.
///
/// # Examples
///
/// ```
/// use maths_core::binary::bytes_to_ints;
///
/// let ints = bytes_to_ints(&[0, 0, 0, 16, 8, 4, 2, 1]).unwrap();
/// assert_eq!(ints, vec![16, 134_480_385]);
/// ```
pub fn bytes_to_ints(bytes: &[u8]) -> Result<Vec<i32>, BinaryError> {
    if bytes.len() % 4 != 0 {
        return Err(BinaryError::InvalidByteCount {
            length: bytes.len(),
            word_size: 4,
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Serialises 32-bit integers as big-endian bytes.
///
/// The inverse of [`bytes_to_ints`].
pub fn ints_to_bytes(ints: &[i32]) -> Vec<u8> {
    ints.iter().flat_map(|i| i.to_be_bytes()).collect()
}

/// Encodes a value in `[0, 1)` as a fixed-point binary fraction.
///
/// The most significant bit of the result (the leftmost character of its
/// string form) has weight 1/2, the next 1/4, and so on. Trailing zero bits
/// are not emitted, so `0.0` yields an empty bit string.
///
/// # Errors
///
/// [`BinaryError::FixedPointOutOfRange`] if `value` is negative, `>= 1` or NaN.
///
/// # Examples
///
/// ```
/// use maths_core::binary::double_to_fixed_point_bits;
///
/// let bits = double_to_fixed_point_bits(0.6875).unwrap();
/// assert_eq!(bits.to_string(), "1011");
/// ```
pub fn double_to_fixed_point_bits(value: f64) -> Result<BitString, BinaryError> {
    if !(0.0..1.0).contains(&value) {
        return Err(BinaryError::FixedPointOutOfRange { value });
    }
    let mut digits = String::with_capacity(64);
    let mut bit_value = 0.5;
    let mut remainder = value;
    while remainder > 0.0 {
        if remainder >= bit_value {
            digits.push('1');
            remainder -= bit_value;
        } else {
            digits.push('0');
        }
        bit_value /= 2.0;
    }
    digits.parse()
}

fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], BinaryError> {
    bytes
        .get(offset..offset.saturating_add(N))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(BinaryError::OffsetOutOfBounds {
            offset,
            required: N,
            length: bytes.len(),
        })
}
