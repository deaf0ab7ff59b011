// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::AllocVec};

// Core imports
use core::cmp::Ordering;

impl<T: PartialOrd, A: Allocator> AllocVec<T, A> {
    /// Lexicographic weak ordering built from `<` alone.
    ///
    /// At the first position where one element is less than the other, that
    /// side is `Less`; if neither is, the elements count as equivalent and
    /// the scan continues. A common prefix orders by length. Elements that
    /// are mutually unordered (`NaN`) are equivalent, so unlike
    /// [`PartialOrd::partial_cmp`] this always returns an answer.
    pub fn weak_cmp<B: Allocator>(&self, other: &AllocVec<T, B>) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            if a < b {
                return Ordering::Less;
            }
            if b < a {
                return Ordering::Greater;
            }
        }
        self.len().cmp(&other.len())
    }
}
