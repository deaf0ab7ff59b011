// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `AllocVec`.
//!
//! These errors cover capacity, allocation and bounds conditions.
//! Panics raised by element constructors are not represented here; they
//! unwind through the container unchanged.

// External imports - thiserror
use thiserror::Error;

/// Errors returned by operations on [`AllocVec`](crate::AllocVec).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity exceeds the allocator's maximum element count.
    ///
    /// Raised before the allocator is asked for memory.
    #[error("requested capacity {requested} exceeds maximum of {max} elements")]
    LengthError {
        /// Number of elements requested
        requested: usize,
        /// Largest element count the allocator can address
        max: usize,
    },
    /// The allocator could not satisfy a valid request.
    #[error("allocator could not provide storage for {capacity} elements")]
    AllocationFailure {
        /// Capacity (in elements) of the block that was requested
        capacity: usize,
    },
    /// A checked access used an index at or beyond the current length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 3, len: 2 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_messages_carry_details() {
        assert_eq!(
            Error::LengthError {
                requested: 10,
                max: 4
            }
            .to_string(),
            "requested capacity 10 exceeds maximum of 4 elements"
        );
        assert_eq!(
            Error::AllocationFailure { capacity: 8 }.to_string(),
            "allocator could not provide storage for 8 elements"
        );
        assert_eq!(
            Error::OutOfRange { index: 5, len: 0 }.to_string(),
            "index 5 out of range for length 0"
        );
    }
}
