// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::AllocVec};

impl<T, A: Allocator + Default> Default for AllocVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}
