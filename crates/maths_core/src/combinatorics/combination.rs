use super::{checked_factorial, copy_selected};
use crate::types::CombinatoricsError;

/// Generates every `length`-element combination of a set, in lexicographic
/// order of element positions (Rosen's algorithm).
///
/// # Examples
///
/// ```
/// use maths_core::combinatorics::CombinationGenerator;
///
/// let generator = CombinationGenerator::new(&['a', 'b', 'c'], 2).unwrap();
/// let all: Vec<String> = generator.map(|c| c.into_iter().collect()).collect();
/// assert_eq!(all, vec!["ab", "ac", "bc"]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationGenerator<T> {
    elements: Vec<T>,
    indices: Vec<usize>,
    length: usize,
    remaining: u64,
    total: u64,
}

impl<T: Clone> CombinationGenerator<T> {
    /// Creates a generator over `elements` producing combinations of `length`.
    ///
    /// # Errors
    ///
    /// - [`CombinatoricsError::SetTooLarge`] for more than 20 elements
    /// - [`CombinatoricsError::LengthExceedsSetSize`] if `length` exceeds the set size
    pub fn new(elements: &[T], length: usize) -> Result<Self, CombinatoricsError> {
        let size = elements.len();
        let size_factorial = checked_factorial(size)?;
        if length > size {
            return Err(CombinatoricsError::LengthExceedsSetSize { length, size });
        }
        let total = size_factorial / (checked_factorial(length)? * checked_factorial(size - length)?);
        let mut generator = Self {
            elements: elements.to_vec(),
            indices: Vec::with_capacity(length),
            length,
            remaining: total,
            total,
        };
        generator.reset();
        Ok(generator)
    }

    /// Restarts the sequence from the first combination.
    pub fn reset(&mut self) {
        self.indices.clear();
        self.indices.extend(0..self.length);
        self.remaining = self.total;
    }

    /// Number of combinations not yet produced.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns `true` while combinations remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// Total number of combinations, `C(n, r)`.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the next combination as a new vector.
    ///
    /// # Errors
    ///
    /// [`CombinatoricsError::ExhaustedSequence`] once every combination has
    /// been produced; call [`reset`](Self::reset) to start again.
    pub fn next_combination(&mut self) -> Result<Vec<T>, CombinatoricsError> {
        self.advance()?;
        Ok(self.indices.iter().map(|&i| self.elements[i].clone()).collect())
    }

    /// Writes the next combination into `destination`.
    ///
    /// # Errors
    ///
    /// - [`CombinatoricsError::DestinationLengthMismatch`] if `destination`
    ///   is not exactly the combination length; the sequence is not advanced
    /// - [`CombinatoricsError::ExhaustedSequence`] once the sequence is drained
    pub fn next_combination_into(&mut self, destination: &mut [T]) -> Result<(), CombinatoricsError> {
        if destination.len() != self.length {
            return Err(CombinatoricsError::DestinationLengthMismatch {
                expected: self.length,
                actual: destination.len(),
            });
        }
        self.advance()?;
        copy_selected(&self.elements, &self.indices, destination)
    }

    fn advance(&mut self) -> Result<(), CombinatoricsError> {
        if self.remaining == 0 {
            return Err(CombinatoricsError::ExhaustedSequence);
        }
        if self.remaining < self.total {
            let n = self.elements.len();
            let r = self.length;
            let mut i = r - 1;
            while self.indices[i] == n - r + i {
                i -= 1;
            }
            self.indices[i] += 1;
            for j in i + 1..r {
                self.indices[j] = self.indices[i] + j - i;
            }
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl<T: Clone> Iterator for CombinationGenerator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_combination().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut generator = CombinationGenerator::new(&["a", "b", "c", "d"], 3).unwrap();
        assert_eq!(generator.total(), 4);
        assert_eq!(generator.next_combination().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(generator.next_combination().unwrap(), vec!["a", "b", "d"]);
        assert_eq!(generator.next_combination().unwrap(), vec!["a", "c", "d"]);
        assert_eq!(generator.next_combination().unwrap(), vec!["b", "c", "d"]);
        assert!(!generator.has_more());
    }

    #[test]
    fn test_exhausted_sequence_requires_reset() {
        let mut generator = CombinationGenerator::new(&[1, 2], 1).unwrap();
        assert_eq!(generator.by_ref().count(), 2);
        assert_eq!(
            generator.next_combination(),
            Err(CombinatoricsError::ExhaustedSequence)
        );
        generator.reset();
        assert_eq!(generator.remaining(), 2);
        assert_eq!(generator.next_combination().unwrap(), vec![1]);
    }

    #[test]
    fn test_total_combinations() {
        let elements: Vec<u8> = (0..20).collect();
        let generator = CombinationGenerator::new(&elements, 10).unwrap();
        assert_eq!(generator.total(), 184_756);
    }

    #[test]
    fn test_zero_length_combination() {
        let mut generator = CombinationGenerator::new(&[1, 2, 3], 0).unwrap();
        assert_eq!(generator.total(), 1);
        assert_eq!(generator.next_combination().unwrap(), Vec::<i32>::new());
        assert!(!generator.has_more());
    }

    #[test]
    fn test_full_length_combination() {
        let mut generator = CombinationGenerator::new(&[1, 2, 3], 3).unwrap();
        assert_eq!(generator.total(), 1);
        assert_eq!(generator.next_combination().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_next_combination_into() {
        let mut generator = CombinationGenerator::new(&['x', 'y', 'z'], 2).unwrap();
        let mut buffer = [' '; 2];
        generator.next_combination_into(&mut buffer).unwrap();
        assert_eq!(buffer, ['x', 'y']);

        let mut wrong = [' '; 3];
        assert_eq!(
            generator.next_combination_into(&mut wrong),
            Err(CombinatoricsError::DestinationLengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(generator.remaining(), 2);
    }

    #[test]
    fn test_length_exceeds_set_size() {
        assert_eq!(
            CombinationGenerator::new(&[1, 2], 3).unwrap_err(),
            CombinatoricsError::LengthExceedsSetSize { length: 3, size: 2 }
        );
    }

    #[test]
    fn test_set_too_large() {
        let elements = vec![0u8; 21];
        assert_eq!(
            CombinationGenerator::new(&elements, 2).unwrap_err(),
            CombinatoricsError::SetTooLarge { size: 21, max: 20 }
        );
    }
}
