// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, vec::AllocVec};

// Core imports
use core::mem;

impl<T, A: Allocator> AllocVec<T, A> {
    /// Moves the contents out into a new vector in `O(1)`, leaving `self`
    /// empty with no storage. The new vector holds a clone of the allocator.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new_in(self.buf.alloc.clone());
        out.buf.swap_block(&mut self.buf);
        out.len = mem::replace(&mut self.len, 0);
        out
    }

    /// Moves the contents into a new vector that uses `alloc`.
    ///
    /// When `alloc` may release `self`'s block (it compares equal, or the
    /// allocator is always-equal) the block is handed over in `O(1)`.
    /// Otherwise a block of exactly `len` slots is obtained from `alloc` and
    /// the elements are relocated into it. On error `self` is unchanged.
    pub fn take_in(&mut self, alloc: A) -> Result<Self, Error> {
        if A::PROPAGATION.always_equal || alloc == self.buf.alloc {
            let mut out = Self::new_in(alloc);
            out.buf.swap_block(&mut self.buf);
            out.len = mem::replace(&mut self.len, 0);
            return Ok(out);
        }
        log::debug!("moving {} elements into a foreign allocator", self.len);
        let mut out = Self::with_capacity_in(self.len, alloc)?;
        self.relocate_onto(&mut out);
        Ok(out)
    }
}
