//! Enumeration of combinations and permutations.
//!
//! Both generators walk their sequence in lexicographic index order and can
//! be drained either through the explicit `next_*` methods, which report
//! exhaustion as [`CombinatoricsError::ExhaustedSequence`], or as ordinary
//! iterators.
//!
//! Arrangement counts are held in a `u64`, which limits the source set to
//! [`MAX_SET_SIZE`] elements.

mod combination;
mod permutation;

pub use combination::CombinationGenerator;
pub use permutation::PermutationGenerator;

use crate::maths::{factorial, MAX_FACTORIAL};
use crate::types::CombinatoricsError;

/// Largest supported source set.
pub const MAX_SET_SIZE: usize = MAX_FACTORIAL as usize;

/// `size!`, rejecting sets whose arrangement counts could overflow.
fn checked_factorial(size: usize) -> Result<u64, CombinatoricsError> {
    if size > MAX_SET_SIZE {
        return Err(CombinatoricsError::SetTooLarge {
            size,
            max: MAX_SET_SIZE,
        });
    }
    factorial(size as u64).ok_or(CombinatoricsError::SetTooLarge {
        size,
        max: MAX_SET_SIZE,
    })
}

/// Copies the elements selected by `indices` into `destination`.
fn copy_selected<T: Clone>(
    elements: &[T],
    indices: &[usize],
    destination: &mut [T],
) -> Result<(), CombinatoricsError> {
    if destination.len() != indices.len() {
        return Err(CombinatoricsError::DestinationLengthMismatch {
            expected: indices.len(),
            actual: destination.len(),
        });
    }
    for (slot, &index) in destination.iter_mut().zip(indices) {
        *slot = elements[index].clone();
    }
    Ok(())
}
