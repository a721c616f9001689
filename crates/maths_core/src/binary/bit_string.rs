//! Fixed-length bit vector.
//!
//! Bit 0 is the least significant bit and is rendered as the *rightmost*
//! character of the string form, so `"1011"` has bits 0, 1 and 3 set.

use std::fmt;
use std::str::FromStr;

use crate::types::BinaryError;

const WORD_LENGTH: usize = 32;

/// A fixed-length sequence of bits packed into 32-bit words.
///
/// # Examples
///
/// ```
/// use maths_core::binary::BitString;
///
/// let mut bits: BitString = "1011".parse().unwrap();
/// assert_eq!(bits.len(), 4);
/// assert_eq!(bits.count_set_bits(), 3);
///
/// bits.flip_bit(2);
/// assert_eq!(bits.to_string(), "1111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitString {
    length: usize,
    data: Vec<u32>,
}

impl BitString {
    /// Creates a bit string of the given length with every bit cleared.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            data: vec![0; length.div_ceil(WORD_LENGTH)],
        }
    }

    /// Creates a bit string whose bits are drawn from `next_word`.
    ///
    /// One 32-bit word is consumed per 32 bits of length (rounded up). Bits
    /// beyond `length` in the final word are discarded, so each retained bit
    /// is an independent fair coin when `next_word` is uniform.
    ///
    /// # Examples
    ///
    /// ```
    /// use maths_core::binary::BitString;
    ///
    /// let bits = BitString::random(4, || 0xFFFF_FFFF);
    /// assert_eq!(bits.to_string(), "1111");
    /// ```
    pub fn random<F>(length: usize, mut next_word: F) -> Self
    where
        F: FnMut() -> u32,
    {
        let mut data: Vec<u32> = (0..length.div_ceil(WORD_LENGTH))
            .map(|_| next_word())
            .collect();
        let tail = length % WORD_LENGTH;
        if tail != 0 {
            if let Some(last) = data.last_mut() {
                *last &= (1u32 << tail) - 1;
            }
        }
        Self { length, data }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` for a zero-length bit string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get_bit(&self, index: usize) -> bool {
        self.assert_valid_index(index);
        let (word, offset) = Self::locate(index);
        (self.data[word] >> offset) & 1 == 1
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        self.assert_valid_index(index);
        let (word, offset) = Self::locate(index);
        if value {
            self.data[word] |= 1 << offset;
        } else {
            self.data[word] &= !(1 << offset);
        }
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn flip_bit(&mut self, index: usize) {
        self.assert_valid_index(index);
        let (word, offset) = Self::locate(index);
        self.data[word] ^= 1 << offset;
    }

    /// Number of bits that are set (population count).
    pub fn count_set_bits(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    fn locate(index: usize) -> (usize, usize) {
        (index / WORD_LENGTH, index % WORD_LENGTH)
    }

    fn assert_valid_index(&self, index: usize) {
        assert!(
            index < self.length,
            "bit index {} out of range for bit string of length {}",
            index,
            self.length
        );
    }
}

impl FromStr for BitString {
    type Err = BinaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        let mut bits = BitString::new(length);
        for (position, character) in s.chars().enumerate() {
            match character {
                '1' => bits.set_bit(length - position - 1, true),
                '0' => {}
                _ => {
                    return Err(BinaryError::InvalidBitCharacter {
                        character,
                        position,
                    })
                }
            }
        }
        Ok(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.length).rev() {
            f.write_str(if self.get_bit(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
