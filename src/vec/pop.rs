// This file is part of alloc-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::AllocVec};

// Core imports
use core::ptr;

impl<T, A: Allocator> AllocVec<T, A> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and `len` no longer covers it.
        Some(unsafe { ptr::read(self.buf.slot(self.len).as_ptr()) })
    }

    /// Destroys the last element in place through the allocator.
    ///
    /// Returns `false` if the vector was empty. Never reallocates.
    #[inline]
    pub fn pop_back(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        // SAFETY: as in `pop`.
        unsafe { self.buf.destroy(self.len) };
        true
    }

    /// Destroys elements from the back until `len <= new_len`. Capacity is
    /// unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.pop_back();
        }
    }

    /// Destroys every element; capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
