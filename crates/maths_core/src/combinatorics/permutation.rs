use super::{checked_factorial, copy_selected};
use crate::types::CombinatoricsError;

/// Generates every ordering of a set in lexicographic order of element
/// positions.
///
/// # Examples
///
/// ```
/// use maths_core::combinatorics::PermutationGenerator;
///
/// let mut generator = PermutationGenerator::new(&[1, 2, 3]).unwrap();
/// assert_eq!(generator.total(), 6);
/// assert_eq!(generator.next_permutation().unwrap(), vec![1, 2, 3]);
/// assert_eq!(generator.next_permutation().unwrap(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationGenerator<T> {
    elements: Vec<T>,
    indices: Vec<usize>,
    remaining: u64,
    total: u64,
}

impl<T: Clone> PermutationGenerator<T> {
    /// Creates a generator over every ordering of `elements`.
    ///
    /// # Errors
    ///
    /// [`CombinatoricsError::SetTooLarge`] for more than 20 elements.
    pub fn new(elements: &[T]) -> Result<Self, CombinatoricsError> {
        let total = checked_factorial(elements.len())?;
        Ok(Self {
            elements: elements.to_vec(),
            indices: (0..elements.len()).collect(),
            remaining: total,
            total,
        })
    }

    /// Restarts the sequence from the identity ordering.
    pub fn reset(&mut self) {
        for (position, index) in self.indices.iter_mut().enumerate() {
            *index = position;
        }
        self.remaining = self.total;
    }

    /// Number of permutations not yet produced.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns `true` while permutations remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// Total number of permutations, `n!`.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the next permutation as a new vector.
    ///
    /// # Errors
    ///
    /// [`CombinatoricsError::ExhaustedSequence`] once every permutation has
    /// been produced.
    pub fn next_permutation(&mut self) -> Result<Vec<T>, CombinatoricsError> {
        self.advance()?;
        Ok(self.indices.iter().map(|&i| self.elements[i].clone()).collect())
    }

    /// Writes the next permutation into `destination`.
    ///
    /// # Errors
    ///
    /// - [`CombinatoricsError::DestinationLengthMismatch`] if `destination`
    ///   is not exactly the set size; the sequence is not advanced
    /// - [`CombinatoricsError::ExhaustedSequence`] once the sequence is drained
    pub fn next_permutation_into(&mut self, destination: &mut [T]) -> Result<(), CombinatoricsError> {
        if destination.len() != self.elements.len() {
            return Err(CombinatoricsError::DestinationLengthMismatch {
                expected: self.elements.len(),
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
            let perm = &mut self.indices;
            let n = perm.len();
            // Rightmost ascent.
            let mut j = n - 2;
            while perm[j] > perm[j + 1] {
                j -= 1;
            }
            // Smallest larger element to its right.
            let mut k = n - 1;
            while perm[j] > perm[k] {
                k -= 1;
            }
            perm.swap(j, k);
            perm[j + 1..].reverse();
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl<T: Clone> Iterator for PermutationGenerator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_permutation().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lexicographic_order() {
        let generator = PermutationGenerator::new(&['a', 'b', 'c']).unwrap();
        let all: Vec<String> = generator.map(|p| p.into_iter().collect()).collect();
        assert_eq!(all, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn test_all_permutations_distinct() {
        let generator = PermutationGenerator::new(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(generator.total(), 120);
        let distinct: HashSet<Vec<i32>> = generator.collect();
        assert_eq!(distinct.len(), 120);
    }

    #[test]
    fn test_exhausted_sequence_requires_reset() {
        let mut generator = PermutationGenerator::new(&[1, 2]).unwrap();
        generator.next_permutation().unwrap();
        assert_eq!(generator.next_permutation().unwrap(), vec![2, 1]);
        assert_eq!(
            generator.next_permutation(),
            Err(CombinatoricsError::ExhaustedSequence)
        );
        generator.reset();
        assert_eq!(generator.next_permutation().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_empty_and_single_element_sets() {
        let mut empty = PermutationGenerator::<u8>::new(&[]).unwrap();
        assert_eq!(empty.total(), 1);
        assert_eq!(empty.next_permutation().unwrap(), Vec::<u8>::new());
        assert!(!empty.has_more());

        let mut single = PermutationGenerator::new(&[7]).unwrap();
        assert_eq!(single.next_permutation().unwrap(), vec![7]);
        assert!(single.next_permutation().is_err());
    }

    #[test]
    fn test_next_permutation_into() {
        let mut generator = PermutationGenerator::new(&[1, 2, 3]).unwrap();
        let mut buffer = [0; 3];
        generator.next_permutation_into(&mut buffer).unwrap();
        generator.next_permutation_into(&mut buffer).unwrap();
        assert_eq!(buffer, [1, 3, 2]);
        assert!(generator.next_permutation_into(&mut [0; 2]).is_err());
        assert_eq!(generator.remaining(), 4);
    }

    #[test]
    fn test_set_too_large() {
        let elements = vec![0u8; 21];
        assert!(matches!(
            PermutationGenerator::new(&elements),
            Err(CombinatoricsError::SetTooLarge { size: 21, .. })
        ));
        let largest = vec![0u8; 20];
        assert_eq!(
            PermutationGenerator::new(&largest).unwrap().total(),
            2_432_902_008_176_640_000
        );
    }
}
