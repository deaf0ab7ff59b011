// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Growth policy.
//!
//! When an append or insertion finds no spare slot, the new capacity is
//! `max(1, 2 * capacity)`, raised to the required element count when that is
//! larger. Doubling keeps a run of appends amortized `O(1)`; the explicit
//! floor of one keeps an empty vector from "doubling" to zero forever.
//!
//! Every target is bounded by the allocator's `max_size`. The doubled value
//! is clamped to it; only a required count above it is an error.

// Crate imports
use crate::error::Error;

/// Returns `len + additional`, or [`Error::LengthError`] if that exceeds `max`.
#[inline]
pub(crate) fn required_len(len: usize, additional: usize, max: usize) -> Result<usize, Error> {
    match len.checked_add(additional) {
        Some(required) if required <= max => Ok(required),
        Some(required) => Err(Error::LengthError { requested: required, max }),
        None => Err(Error::LengthError {
            requested: usize::MAX,
            max,
        }),
    }
}

/// Checks a caller-chosen exact capacity against `max`.
#[inline]
pub(crate) fn exact(requested: usize, max: usize) -> Result<usize, Error> {
    if requested > max {
        return Err(Error::LengthError { requested, max });
    }
    Ok(requested)
}

/// Capacity to grow to when `required` elements must fit into `capacity`.
#[inline]
pub(crate) fn grow_target(capacity: usize, required: usize, max: usize) -> Result<usize, Error> {
    let required = exact(required, max)?;
    let doubled = capacity.saturating_mul(2).max(1).min(max);
    Ok(doubled.max(required))
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{exact, grow_target, required_len};
    use crate::Error;

    #[test]
    fn test_empty_grows_to_one() {
        assert_eq!(grow_target(0, 1, usize::MAX), Ok(1));
    }

    #[test]
    fn test_doubles_when_larger_than_required() {
        assert_eq!(grow_target(1, 2, usize::MAX), Ok(2));
        assert_eq!(grow_target(4, 5, usize::MAX), Ok(8));
        assert_eq!(grow_target(8, 9, 100), Ok(16));
    }

    #[test]
    fn test_required_wins_when_larger_than_doubling() {
        assert_eq!(grow_target(2, 10, usize::MAX), Ok(10));
        assert_eq!(grow_target(0, 7, usize::MAX), Ok(7));
    }

    #[test]
    fn test_doubling_clamped_to_max() {
        assert_eq!(grow_target(6, 7, 10), Ok(10));
        assert_eq!(grow_target(usize::MAX / 2 + 1, usize::MAX / 2 + 2, usize::MAX), Ok(usize::MAX));
    }

    #[test]
    fn test_required_above_max_is_length_error() {
        assert_eq!(
            grow_target(4, 11, 10),
            Err(Error::LengthError {
                requested: 11,
                max: 10
            })
        );
        assert_eq!(
            exact(5, 4),
            Err(Error::LengthError {
                requested: 5,
                max: 4
            })
        );
    }

    #[test]
    fn test_required_len_overflow() {
        assert_eq!(required_len(3, 2, 10), Ok(5));
        assert_eq!(
            required_len(usize::MAX, 1, usize::MAX),
            Err(Error::LengthError {
                requested: usize::MAX,
                max: usize::MAX
            })
        );
    }
}
