// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::{capacity_overflow, AllocVec};

impl<T, const N: usize> From<[T; N]> for AllocVec<T> {
    /// Moves the array's elements into a vector with `capacity == N`.
    ///
    /// # Panics
    ///
    /// If the global allocator cannot provide the block.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N).unwrap_or_else(|e| capacity_overflow(e));
        for item in src {
            // SAFETY: at most `N` items are written into `N` slots.
            unsafe { v.push_in_place(item) };
        }
        v
    }
}
